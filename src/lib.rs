//! admediation - file-backed ad network records with an ad-hoc query engine
//!
//! ## Modules
//!
//! - **`store`**: the ordered record set, loaded from and written through to
//!   a JSON data file under a single lock.
//! - **`query`**: equality filters, ranking, and the admob / opt-out /
//!   fallback rules applied to URL query parameters.
//! - **`http_server`**: axum routes exposing list, query, create, update,
//!   and delete.
//! - **`cli`**: `serve` and one-shot `query` commands plus config loading.

pub mod cli;
pub mod encoding;
pub mod http_server;
pub mod query;
pub mod store;
