//! Router setup and configuration

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

use crate::api::handlers;
use crate::api::state::AppState;

/// Path of the ingest endpoint
pub const INGEST_PATH: &str = "/api/v1/ingest";

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // API v1 routes
    let api_v1 = Router::new().route("/ingest", post(handlers::ingest_packet));

    Router::new()
        .nest("/api/v1", api_v1)
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
