//! # Query Engine
//!
//! Evaluates ad-hoc equality queries against record documents:
//!
//! 1. Baseline: `id` present and non-null
//! 2. One equality filter per parameter, combined with AND
//! 3. `platform=android` with `osversion=9` drops `admob`
//! 4. Sort by `value` descending (stable)
//! 5. A surviving `admob` drops every `admod-optout`
//! 6. An empty result falls back to the `platform` filter alone

use serde_json::Value;

use super::errors::QueryResult;
use super::filter::{FilterExpr, FilterSet};
use super::params::QueryParams;
use super::sorter::ResultSorter;

/// Description of the network hidden on android 9 and that suppresses opt-outs
pub const ADMOB: &str = "admob";

/// Description of the opt-out network hidden whenever admob is shown
pub const ADMOB_OPTOUT: &str = "admod-optout";

const RANK_FIELD: &str = "value";

/// Result of a query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    /// Matching documents, highest `value` first
    pub documents: Vec<Value>,
    /// Whether the platform-only fallback produced `documents`
    pub fallback: bool,
}

/// Stateless query evaluator
pub struct QueryEngine;

impl QueryEngine {
    /// Run `params` against `documents` (store order).
    ///
    /// Fails only when an `id` parameter is not an integer.
    pub fn execute(documents: &[Value], params: &QueryParams) -> QueryResult<QueryOutcome> {
        let mut filters = FilterSet::new().and(FilterExpr::not_null("id"));
        for filter in params.filters()? {
            filters = filters.and(filter);
        }
        if Self::hides_admob(params) {
            filters = filters.and(FilterExpr::neq("description", Value::from(ADMOB)));
        }

        let mut results = filters.select(documents);
        ResultSorter::sort_desc(&mut results, RANK_FIELD);

        if results.is_empty() {
            let documents = Self::platform_fallback(documents, params);
            tracing::debug!(
                params = params.len(),
                results = documents.len(),
                "query matched nothing, using platform fallback"
            );
            return Ok(QueryOutcome {
                documents,
                fallback: true,
            });
        }

        if results.iter().any(|doc| has_description(doc, ADMOB)) {
            results.retain(|doc| !has_description(doc, ADMOB_OPTOUT));
        }

        tracing::debug!(params = params.len(), results = results.len(), "query executed");

        Ok(QueryOutcome {
            documents: results,
            fallback: false,
        })
    }

    /// Android 9 devices never get admob
    fn hides_admob(params: &QueryParams) -> bool {
        match (params.get("platform"), params.get("osversion")) {
            (Some(platform), Some(osversion)) => {
                platform.eq_ignore_ascii_case("android") && osversion.trim() == "9"
            }
            _ => false,
        }
    }

    /// Everything for the requested platform, or everything at all
    fn platform_fallback(documents: &[Value], params: &QueryParams) -> Vec<Value> {
        let mut filters = FilterSet::new().and(FilterExpr::not_null("id"));
        if let Some(platform) = params.get("platform") {
            filters = filters.and(FilterExpr::eq(
                "platform",
                Value::String(platform.to_lowercase()),
            ));
        }

        let mut results = filters.select(documents);
        ResultSorter::sort_desc(&mut results, RANK_FIELD);
        results
    }
}

fn has_description(doc: &Value, description: &str) -> bool {
    doc.get("description")
        .and_then(Value::as_str)
        .map(|d| d.eq_ignore_ascii_case(description))
        .unwrap_or(false)
}
