//! # HTTP Server
//!
//! Combines the ad network routes with request tracing and serves them.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::routes::{adnetwork_routes, health_routes, AdNetworkState};
use crate::store::AdNetworkStore;

/// HTTP server for the ad network API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: AdNetworkStore) -> Self {
        let router = Self::build_router(Arc::new(AdNetworkState::new(store)));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(state: Arc<AdNetworkState>) -> Router {
        Router::new()
            .merge(health_routes(state.clone()))
            .merge(adnetwork_routes(state))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;

        tracing::info!(addr = %addr, "ad network API listening");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
