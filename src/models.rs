//! Shared models and types
//!
//! Response shapes used by more than one handler.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub zones: usize,
    pub total_cctvs: usize,
    pub timestamp: String,
}

/// Zone listing response
///
/// `cctv_mapping` keeps registry declaration order (zone_1 first, zone_10 last).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneListResponse {
    pub zones: Vec<String>,
    pub cctv_mapping: serde_json::Map<String, serde_json::Value>,
    pub total_cctvs: usize,
}
