//! # Ad-hoc Query Module
//!
//! Turns URL query parameters into filtered, ranked views of the record set.

pub mod engine;
pub mod errors;
pub mod filter;
pub mod params;
pub mod sorter;

pub use engine::{QueryEngine, QueryOutcome, ADMOB, ADMOB_OPTOUT};
pub use errors::{QueryError, QueryResult};
pub use filter::{FilterExpr, FilterOperator, FilterSet};
pub use params::QueryParams;
pub use sorter::ResultSorter;
