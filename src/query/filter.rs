//! # Filter Expressions
//!
//! Equality-style predicates evaluated against record documents.

use std::borrow::Cow;

use serde_json::Value;

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equals
    Eq,

    /// Not equals
    Neq,

    /// Is null/not null
    Is,
}

/// A filter expression
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    /// Field to filter on
    pub field: String,

    /// Comparison operator
    pub operator: FilterOperator,

    /// Value to compare against
    pub value: Value,
}

impl FilterExpr {
    /// Create a new filter expression
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Create an equality filter
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOperator::Eq, value)
    }

    /// Create a not-equal filter
    pub fn neq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOperator::Neq, value)
    }

    /// Create a filter requiring the field to be present and non-null
    pub fn not_null(field: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Is, Value::Bool(true))
    }

    /// Check if a document matches this filter
    ///
    /// A missing field never equals anything, so it fails `Eq`, passes
    /// `Neq`, and counts as null for `Is`.
    pub fn matches(&self, doc: &Value) -> bool {
        let field_value = match doc.get(&self.field) {
            Some(v) => v,
            None => {
                return match self.operator {
                    FilterOperator::Eq => false,
                    FilterOperator::Neq => true,
                    FilterOperator::Is => self.value.is_null(),
                }
            }
        };

        match self.operator {
            FilterOperator::Eq => values_equal(field_value, &self.value),
            FilterOperator::Neq => !values_equal(field_value, &self.value),
            FilterOperator::Is => {
                if self.value.is_null() {
                    field_value.is_null()
                } else {
                    !field_value.is_null()
                }
            }
        }
    }
}

/// Equality between a document field and a filter value.
///
/// Numeric filter values compare numerically. String filter values compare
/// case-insensitively against the field's textual form, so `value=10` matches
/// a numeric `10`.
fn values_equal(field: &Value, target: &Value) -> bool {
    match target {
        Value::String(wanted) => match text_of(field) {
            Some(text) => text.to_lowercase() == wanted.to_lowercase(),
            None => false,
        },
        other => field == other,
    }
}

fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// A set of filters combined with AND logic
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub filters: Vec<FilterExpr>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: FilterExpr) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check if a document matches all filters
    pub fn matches(&self, doc: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(doc))
    }

    /// Documents matching all filters, in input order
    pub fn select(&self, docs: &[Value]) -> Vec<Value> {
        docs.iter().filter(|d| self.matches(d)).cloned().collect()
    }
}
