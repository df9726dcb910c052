//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable, or invalid
    #[error("ADM_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Data file could not be loaded
    #[error("ADM_CLI_BOOT_FAILED: {0}")]
    Boot(#[from] StoreError),

    /// Query arguments rejected
    #[error("ADM_CLI_QUERY_ERROR: {0}")]
    Query(#[from] QueryError),

    /// I/O error (listener bind, stdout)
    #[error("ADM_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
