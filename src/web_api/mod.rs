//! WebAPI - REST API Endpoints
//!
//! ## Responsibilities
//!
//! - HTTP API routes
//! - Request validation
//! - Response formatting

mod routes;

pub use routes::create_router;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::models::HealthResponse;
use crate::state::AppState;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "Mock Crowd Density API";

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        zones: state.registry.zone_count(),
        total_cctvs: state.registry.total_cctv_count(),
        timestamp: Utc::now().to_rfc3339(),
    };

    Json(response)
}
