//! # Ad Network HTTP Server Module
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/adnetworks` - Full record list
//! - `/adnetwork` - Ad-hoc query (GET) and create (POST)
//! - `/adnetwork/{key}` - By ad type (GET), update (POST), delete (DELETE)

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{RestError, RestResult};
pub use routes::AdNetworkState;
pub use server::HttpServer;
