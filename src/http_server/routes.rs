//! Ad Network HTTP Routes
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/adnetworks` | full list |
//! | GET | `/adnetwork` | ad-hoc query |
//! | POST | `/adnetwork` | create |
//! | GET | `/adnetwork/{adtype}` | by ad type |
//! | POST | `/adnetwork/{id}` | update value |
//! | DELETE | `/adnetwork/{id}` | delete |
//!
//! The last three share one path segment; the method picks its meaning.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde_json::Value;

use super::errors::{RestError, RestResult};
use super::response::{HealthResponse, PrettyJson};
use crate::query::{QueryEngine, QueryParams};
use crate::store::{AdNetwork, AdNetworkStore, NewAdNetwork, StoreResult, ValueUpdate};

// ==================
// Shared State
// ==================

/// State shared across ad network handlers
pub struct AdNetworkState {
    pub store: AdNetworkStore,
}

impl AdNetworkState {
    pub fn new(store: AdNetworkStore) -> Self {
        Self { store }
    }
}

// ==================
// Routes
// ==================

/// Create ad network routes
pub fn adnetwork_routes(state: Arc<AdNetworkState>) -> Router {
    Router::new()
        .route("/adnetworks", get(list_handler))
        .route("/adnetwork", get(query_handler).post(create_handler))
        .route(
            "/adnetwork/:key",
            get(by_ad_type_handler)
                .post(update_handler)
                .delete(delete_handler),
        )
        .with_state(state)
}

/// Create the liveness route
pub fn health_routes(state: Arc<AdNetworkState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn parse_id(raw: &str) -> RestResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| RestError::InvalidId(raw.to_string()))
}

fn parse_body(body: &Bytes) -> RestResult<Value> {
    serde_json::from_slice(body).map_err(|e| RestError::InvalidBody(e.to_string()))
}

/// Run a mutation on the blocking pool. Mutations hold the store lock
/// across a full data file write.
async fn mutate<T, F>(state: Arc<AdNetworkState>, op: F) -> RestResult<T>
where
    F: FnOnce(&AdNetworkStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&state.store))
        .await
        .map_err(|e| RestError::Internal(format!("store task failed: {}", e)))?
        .map_err(RestError::from)
}

// ==================
// Handlers
// ==================

async fn health_handler(
    State(state): State<Arc<AdNetworkState>>,
) -> RestResult<PrettyJson<HealthResponse>> {
    Ok(PrettyJson(HealthResponse::ok(state.store.len()?)))
}

async fn list_handler(
    State(state): State<Arc<AdNetworkState>>,
) -> RestResult<PrettyJson<Vec<AdNetwork>>> {
    Ok(PrettyJson(state.store.list_all()?))
}

async fn by_ad_type_handler(
    State(state): State<Arc<AdNetworkState>>,
    Path(adtype): Path<String>,
) -> RestResult<PrettyJson<Vec<AdNetwork>>> {
    Ok(PrettyJson(state.store.by_ad_type(&adtype)?))
}

async fn query_handler(
    State(state): State<Arc<AdNetworkState>>,
    Query(raw): Query<Vec<(String, String)>>,
) -> RestResult<PrettyJson<Vec<Value>>> {
    let params = QueryParams::parse(raw);
    let documents = state.store.documents()?;

    let outcome = QueryEngine::execute(&documents, &params)?;
    Ok(PrettyJson(outcome.documents))
}

async fn create_handler(
    State(state): State<Arc<AdNetworkState>>,
    body: Bytes,
) -> RestResult<PrettyJson<AdNetwork>> {
    let new = NewAdNetwork::from_body(parse_body(&body)?)
        .map_err(|e| RestError::InvalidBody(e.to_string()))?;

    let created = mutate(state, move |store| store.create(new)).await?;
    Ok(PrettyJson(created))
}

async fn update_handler(
    State(state): State<Arc<AdNetworkState>>,
    Path(key): Path<String>,
    body: Bytes,
) -> RestResult<PrettyJson<AdNetwork>> {
    let id = parse_id(&key)?;
    let update = ValueUpdate::from_body(parse_body(&body)?)
        .map_err(|e| RestError::InvalidBody(e.to_string()))?;

    let updated = mutate(state, move |store| store.update(id, update)).await?;
    Ok(PrettyJson(updated))
}

async fn delete_handler(
    State(state): State<Arc<AdNetworkState>>,
    Path(key): Path<String>,
) -> RestResult<PrettyJson<AdNetwork>> {
    let id = parse_id(&key)?;
    let removed = mutate(state, move |store| store.delete(id)).await?;
    Ok(PrettyJson(removed))
}
