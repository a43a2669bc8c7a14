//! API Routes

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map};

use crate::density_generator::{self, CctvDensityRequest, DensityReading};
use crate::error::Result;
use crate::models::ZoneListResponse;
use crate::state::AppState;
use crate::zone_aggregator::{self, ZoneSummary};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(super::health_check))
        // Crowd density
        .route("/api/crowd-density/cctv", post(cctv_density))
        .route("/api/crowd-density/zones", get(list_zones))
        .route("/api/crowd-density/zones/:zone_id", post(zone_density))
        .with_state(state)
}

// ========================================
// Crowd Density Handlers
// ========================================

/// POST /api/crowd-density/cctv - Single CCTV reading
async fn cctv_density(
    State(state): State<AppState>,
    Json(req): Json<CctvDensityRequest>,
) -> Result<Json<DensityReading>> {
    let reading = density_generator::generate(
        &state.registry,
        &req.cctv_id,
        &req.zone_id,
        req.timestamp.as_deref(),
    )?;

    Ok(Json(reading))
}

/// GET /api/crowd-density/zones - Zone listing with full CCTV mapping
async fn list_zones(State(state): State<AppState>) -> Json<ZoneListResponse> {
    let mut cctv_mapping = Map::new();
    for (zone_id, cctvs) in state.registry.iter() {
        cctv_mapping.insert(zone_id.to_string(), json!(cctvs));
    }

    Json(ZoneListResponse {
        zones: state.registry.zone_ids().iter().map(|z| z.to_string()).collect(),
        cctv_mapping,
        total_cctvs: state.registry.total_cctv_count(),
    })
}

/// POST /api/crowd-density/zones/:zone_id - Aggregated zone view
async fn zone_density(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Result<Json<ZoneSummary>> {
    let summary = zone_aggregator::aggregate(&state.registry, &zone_id)?;

    Ok(Json(summary))
}
