//! # Ad Network Record Store
//!
//! - Ordered in-memory record sequence behind one mutex
//! - Loaded once from a JSON data file
//! - Full file rewrite (one-space indent) after every mutation
//! - Ids assigned as max existing id + 1

mod errors;
mod file_store;
mod record;

pub use errors::{StoreError, StoreResult};
pub use file_store::AdNetworkStore;
pub use record::{AdNetwork, NewAdNetwork, ValueUpdate};
