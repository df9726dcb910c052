//! CLI module for admediation
//!
//! Provides command-line interface for:
//! - serve: Load the data file and serve the HTTP API
//! - query: One-shot query against the data file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{query, run, run_command, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliResult};
