//! HTTP API application wiring (Axum router + shared state).
//!
//! Layout:
//! - `state.rs`: the loaded catalog, query memos, submission delays
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use storefront_catalog::Catalog;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Loads the catalog; a missing or invalid catalog is returned as an error so
/// the process can refuse to start.
pub fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    let state = Arc::new(AppState::new(catalog, config.delays));
    Ok(router_with_state(state))
}

/// Router over an already-built state.
pub fn router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(state)))
}
