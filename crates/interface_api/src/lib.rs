//! HTTP API layer for the ID lookup system
//!
//! Thin axum surface over the identity domain: no decision logic lives here.
//! The search handler gates on validation before invoking the orchestrator,
//! mirroring the UI contract (the trigger is enabled only for a valid
//! candidate; the orchestrator itself never re-validates).

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use domain_identity::SearchOrchestrator;

/// Shared application state for the handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<SearchOrchestrator>,
}

impl AppState {
    /// Creates application state over the given orchestrator.
    pub fn new(orchestrator: SearchOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

/// Builds the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/v1/id/validate", post(handlers::identity::validate_id))
        .route("/api/v1/id/search", post(handlers::identity::search_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
