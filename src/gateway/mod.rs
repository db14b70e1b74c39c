//! Proxy gateway between the browser-facing client and the analysis backend.
//!
//! This module provides:
//! - `POST /analyze` pass-through with uniform error envelopes
//! - `GET /api/keys` tier-listing proxy
//! - `GET /api/educational/tips` static educational payload
//!
//! Every failure mode on these routes resolves to a JSON response with an
//! appropriate status code; no fault escapes the gateway unstructured.

mod routes;
mod tips;

pub use routes::*;
pub use tips::builtin_tips;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::backend::BackendClient;

/// Shared state for gateway handlers
pub struct GatewayState {
    /// Client for the upstream analysis backend.
    pub backend: BackendClient,
}

impl GatewayState {
    /// Create gateway state around a backend client
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

/// Build the gateway router
pub fn router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/analyze", post(routes::analyze))
        .route("/api/keys", get(routes::key_tiers))
        .route("/api/educational/tips", get(routes::educational_tips))
        .with_state(state)
}
