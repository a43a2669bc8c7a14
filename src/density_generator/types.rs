//! Density Generator Type Definitions
//!
//! ## Per-CCTV density scale
//! - low: fewer than 25 people
//! - medium: 25-49
//! - high: 50-74
//! - critical: 75 and up

use serde::{Deserialize, Serialize};

/// Per-CCTV density bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl DensityLevel {
    /// Bucket a people count. Boundaries are inclusive on the lower end
    /// (25 is medium, not low).
    pub fn from_people_count(count: u32) -> Self {
        if count < 25 {
            Self::Low
        } else if count < 50 {
            Self::Medium
        } else if count < 75 {
            Self::High
        } else {
            Self::Critical
        }
    }
}

impl std::fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Single CCTV reading request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CctvDensityRequest {
    pub cctv_id: String,
    pub zone_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Generated occupancy reading for one CCTV at one instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityReading {
    pub cctv_id: String,
    pub zone_id: String,
    pub people_count: u32,
    pub density_level: DensityLevel,
    pub confidence: f64,
    pub timestamp: String,
}
