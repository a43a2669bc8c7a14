//! ZoneAggregator - Per-Zone Density Rollup
//!
//! ## Responsibilities
//!
//! - Fan out one generated reading per CCTV in a registered zone
//! - Reduce the readings into totals, an average and a coarse density level
//!
//! Unlike the single-reading path, aggregation requires the zone to be
//! registered; unknown zones are rejected.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::density_generator::{self, DensityLevel};
use crate::error::{Error, Result};
use crate::zone_registry::ZoneRegistry;

/// Zone-level density bucket (coarser than the per-CCTV scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneDensityLevel {
    Low,
    Medium,
    High,
}

impl ZoneDensityLevel {
    /// Bucket an average people count
    pub fn from_average(average: f64) -> Self {
        if average < 30.0 {
            Self::Low
        } else if average < 65.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for ZoneDensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Per-CCTV slice of a zone summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CctvPartial {
    pub cctv_id: String,
    pub people_count: u32,
    pub density_level: DensityLevel,
}

/// Aggregated view of one zone at one instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub zone_id: String,
    pub cctv_count: usize,
    pub total_people: u64,
    pub average_density: f64,
    pub density_level: ZoneDensityLevel,
    pub cctv_data: Vec<CctvPartial>,
    pub timestamp: String,
}

/// Aggregate fresh readings from every CCTV in a registered zone.
///
/// Readings are generated sequentially in registry order; caller timestamps
/// are never propagated into the aggregate.
pub fn aggregate(registry: &ZoneRegistry, zone_id: &str) -> Result<ZoneSummary> {
    let cctv_ids = registry
        .cctvs(zone_id)
        .ok_or_else(|| Error::NotFound(format!("Zone {} not found", zone_id)))?;

    let mut cctv_data = Vec::with_capacity(cctv_ids.len());
    for cctv_id in cctv_ids {
        let reading = density_generator::generate(registry, cctv_id, zone_id, None)?;
        cctv_data.push(CctvPartial {
            cctv_id: reading.cctv_id,
            people_count: reading.people_count,
            density_level: reading.density_level,
        });
    }

    let total_people: u64 = cctv_data.iter().map(|c| u64::from(c.people_count)).sum();
    // Divide by the actual CCTV count present, never a constant
    let average = total_people as f64 / cctv_data.len() as f64;

    Ok(ZoneSummary {
        zone_id: zone_id.to_string(),
        cctv_count: cctv_data.len(),
        total_people,
        average_density: density_generator::round2(average),
        density_level: ZoneDensityLevel::from_average(average),
        cctv_data,
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_density_level_buckets() {
        assert_eq!(ZoneDensityLevel::from_average(0.0), ZoneDensityLevel::Low);
        assert_eq!(ZoneDensityLevel::from_average(29.99), ZoneDensityLevel::Low);
        assert_eq!(ZoneDensityLevel::from_average(30.0), ZoneDensityLevel::Medium);
        assert_eq!(ZoneDensityLevel::from_average(64.99), ZoneDensityLevel::Medium);
        assert_eq!(ZoneDensityLevel::from_average(65.0), ZoneDensityLevel::High);
    }

    #[test]
    fn test_zone_density_level_display() {
        assert_eq!(ZoneDensityLevel::Low.to_string(), "low");
        assert_eq!(ZoneDensityLevel::Medium.to_string(), "medium");
        assert_eq!(ZoneDensityLevel::High.to_string(), "high");
    }

    #[test]
    fn test_zone_3_aggregation() {
        let registry = ZoneRegistry::new();
        let summary = aggregate(&registry, "zone_3").unwrap();

        assert_eq!(summary.zone_id, "zone_3");
        assert_eq!(summary.cctv_count, 2);
        assert_eq!(summary.cctv_data.len(), 2);
        assert_eq!(summary.cctv_data[0].cctv_id, "cctv_z3_1");
        assert_eq!(summary.cctv_data[1].cctv_id, "cctv_z3_2");

        let total: u64 = summary
            .cctv_data
            .iter()
            .map(|c| u64::from(c.people_count))
            .sum();
        assert_eq!(summary.total_people, total);

        let average = total as f64 / 2.0;
        assert!((summary.average_density - density_generator::round2(average)).abs() < 1e-9);
        assert_eq!(summary.density_level, ZoneDensityLevel::from_average(average));
    }

    #[test]
    fn test_partials_follow_registry_order() {
        let registry = ZoneRegistry::new();
        let summary = aggregate(&registry, "zone_7").unwrap();
        let ids: Vec<&str> = summary.cctv_data.iter().map(|c| c.cctv_id.as_str()).collect();
        assert_eq!(ids, ["cctv_z7_1", "cctv_z7_2", "cctv_z7_3"]);
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        let registry = ZoneRegistry::new();
        let err = aggregate(&registry, "zone_99").unwrap_err();
        match err {
            Error::NotFound(msg) => assert_eq!(msg, "Zone zone_99 not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
