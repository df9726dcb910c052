//! Result sorting for query execution

use std::cmp::Ordering;

use serde_json::Value;

/// Sorts result documents
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts documents by `field`, highest first.
    ///
    /// Sort is stable: documents with equal keys keep their input order.
    pub fn sort_desc(documents: &mut [Value], field: &str) {
        documents.sort_by(|a, b| Self::compare_values(a.get(field), b.get(field)).reverse());
    }

    /// Compares two JSON values for sorting.
    ///
    /// Ordering rules:
    /// - missing < null < bool < number < string
    /// - For same types, natural ordering
    fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a_val), Some(b_val)) => {
                let type_order = |v: &Value| -> u8 {
                    match v {
                        Value::Null => 0,
                        Value::Bool(_) => 1,
                        Value::Number(_) => 2,
                        Value::String(_) => 3,
                        Value::Array(_) => 4,
                        Value::Object(_) => 5,
                    }
                };

                let a_type = type_order(a_val);
                let b_type = type_order(b_val);

                if a_type != b_type {
                    return a_type.cmp(&b_type);
                }

                match (a_val, b_val) {
                    (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
                    (Value::Number(a_n), Value::Number(b_n)) => {
                        match (a_n.as_i64(), b_n.as_i64()) {
                            (Some(x), Some(y)) => x.cmp(&y),
                            _ => {
                                let a_f = a_n.as_f64().unwrap_or(0.0);
                                let b_f = b_n.as_f64().unwrap_or(0.0);
                                a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
                            }
                        }
                    }
                    (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
                    _ => Ordering::Equal,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(docs: &[Value]) -> Vec<i64> {
        docs.iter().map(|d| d["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn test_sort_descending() {
        let mut docs = vec![
            json!({"id": 1, "value": 20}),
            json!({"id": 2, "value": 30}),
            json!({"id": 3, "value": 25}),
        ];

        ResultSorter::sort_desc(&mut docs, "value");

        assert_eq!(ids(&docs), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_negative_values() {
        let mut docs = vec![json!({"id": 1, "value": -4}), json!({"id": 2, "value": 20})];

        ResultSorter::sort_desc(&mut docs, "value");

        assert_eq!(ids(&docs), vec![2, 1]);
    }

    #[test]
    fn test_sort_stable_on_ties() {
        let mut docs = vec![
            json!({"id": 1, "value": 5}),
            json!({"id": 2, "value": 9}),
            json!({"id": 3, "value": 5}),
        ];

        ResultSorter::sort_desc(&mut docs, "value");

        assert_eq!(ids(&docs), vec![2, 1, 3]);
    }

    #[test]
    fn test_missing_field_sorts_last_when_descending() {
        let mut docs = vec![json!({"id": 1}), json!({"id": 2, "value": 0})];

        ResultSorter::sort_desc(&mut docs, "value");

        assert_eq!(ids(&docs), vec![2, 1]);
    }
}
