//! Indented JSON encoding shared by the data file and HTTP responses.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indent used for the persisted data file
pub const FILE_INDENT: &[u8] = b" ";

/// Indent used for HTTP response bodies
pub const RESPONSE_INDENT: &[u8] = b"\t";

/// Serialize `value` as pretty-printed JSON using `indent` per nesting level.
pub fn to_indented_vec<T: Serialize + ?Sized>(
    value: &T,
    indent: &[u8],
) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    value.serialize(&mut ser)?;
    Ok(buf)
}
