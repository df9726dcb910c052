//! # Query Parameter Parser
//!
//! Normalizes raw query-string pairs into the ordered parameter list the
//! engine evaluates.

use serde_json::Value;

use super::errors::{QueryError, QueryResult};
use super::filter::FilterExpr;

/// Parsed query parameters, in request declaration order.
///
/// Names are lowercased. When a name appears more than once only its first
/// value is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse query parameters from raw (name, value) pairs
    pub fn parse<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = Vec::new();

        for (key, value) in raw {
            let name = key.as_ref().to_lowercase();
            if pairs.iter().any(|(existing, _)| *existing == name) {
                continue;
            }
            pairs.push((name, value.into()));
        }

        Self { pairs }
    }

    /// Parse `key=value` arguments, as given on the command line
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> QueryResult<Self> {
        let mut raw = Vec::with_capacity(args.len());
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| QueryError::InvalidParam(arg.to_string()))?;
            if key.is_empty() {
                return Err(QueryError::InvalidParam(arg.to_string()));
            }
            raw.push((key.to_string(), value.to_string()));
        }
        Ok(Self::parse(raw))
    }

    /// Value of parameter `name` (lowercase)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One equality filter per parameter, in declaration order
    pub fn filters(&self) -> QueryResult<Vec<FilterExpr>> {
        self.iter().map(|(key, value)| parse_filter(key, value)).collect()
    }
}

/// Parse a single equality filter from key=value
fn parse_filter(field: &str, value: &str) -> QueryResult<FilterExpr> {
    if field == "id" {
        let id: i64 = value
            .trim()
            .parse()
            .map_err(|_| QueryError::InvalidId(value.to_string()))?;
        return Ok(FilterExpr::eq(field, Value::from(id)));
    }

    Ok(FilterExpr::eq(field, Value::String(value.to_lowercase())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::FilterOperator;
    use serde_json::json;

    #[test]
    fn test_names_are_lowercased() {
        let params = QueryParams::parse(vec![("Platform", "Android"), ("OSVersion", "9")]);

        assert_eq!(params.get("platform"), Some("Android"));
        assert_eq!(params.get("osversion"), Some("9"));
    }

    #[test]
    fn test_first_value_wins() {
        let params = QueryParams::parse(vec![
            ("adtype", "video"),
            ("AdType", "banner"),
            ("adtype", "native"),
        ]);

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("adtype"), Some("video"));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let params = QueryParams::parse(vec![("b", "1"), ("a", "2"), ("c", "3")]);
        let names: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_id_filter_is_numeric() {
        let params = QueryParams::parse(vec![("ID", "12")]);
        let filters = params.filters().unwrap();

        assert_eq!(filters[0].field, "id");
        assert_eq!(filters[0].operator, FilterOperator::Eq);
        assert_eq!(filters[0].value, json!(12));
    }

    #[test]
    fn test_invalid_id_rejected() {
        let params = QueryParams::parse(vec![("id", "abc")]);
        assert_eq!(
            params.filters(),
            Err(QueryError::InvalidId("abc".to_string()))
        );
    }

    #[test]
    fn test_string_filter_value_lowercased() {
        let params = QueryParams::parse(vec![("countrycode", "DE")]);
        assert_eq!(params.filters().unwrap()[0].value, json!("de"));
    }

    #[test]
    fn test_from_args() {
        let params = QueryParams::from_args(&["platform=ios", "appversion=1.2=b"]).unwrap();
        assert_eq!(params.get("platform"), Some("ios"));
        assert_eq!(params.get("appversion"), Some("1.2=b"));

        assert!(matches!(
            QueryParams::from_args(&["platform"]),
            Err(QueryError::InvalidParam(_))
        ));
        assert!(QueryParams::from_args(&["=x"]).is_err());
    }
}
