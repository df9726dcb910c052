//! CLI argument definitions using clap
//!
//! Commands:
//! - admediation serve [--config <path>] [--data-file <path>] [--port <n>]
//! - admediation query [--config <path>] [--data-file <path>] [key=value ...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// admediation - ad network mediation records over HTTP
#[derive(Parser, Debug)]
#[command(name = "admediation")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the data file and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Data file holding the record array (overrides config)
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one ad-hoc query against the data file and print the result
    Query {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Data file holding the record array (overrides config)
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Filters as key=value, e.g. platform=android osversion=9
        params: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
