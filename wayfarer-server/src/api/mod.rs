//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod health;
pub mod travel;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::registry::Registry;

/// Shared handler state: the registry plus server configuration
#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
    pub config: Arc<Config>,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Travel request lifecycle
        .route("/travel/request", post(travel::submit_travel_request))
        .route("/travel/status/{request_id}", get(travel::get_travel_status))
        .route("/travel/result/{request_id}", get(travel::get_travel_result))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
