use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Fixed confirmation message. The exact text is part of the wire
    /// contract and must not change.
    pub message: &'static str,
}

/// GET / -- confirms the API is up. Never fails, has no side effects.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Data Engineering API is running successfully!",
    })
}

/// Mount the health check route (root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
