//! ZoneRegistry - Static Zone/CCTV Mapping
//!
//! ## Responsibilities
//!
//! - Own the fixed zone -> CCTV list mapping for the venue
//! - Answer membership and listing queries
//!
//! Built once at startup and shared read-only via `AppState`; there is no
//! mutation path, so no lock is needed.

/// One venue zone with its ordered CCTV list
#[derive(Debug, Clone)]
struct ZoneEntry {
    zone_id: String,
    cctv_ids: Vec<String>,
}

/// ZoneRegistry instance
#[derive(Debug)]
pub struct ZoneRegistry {
    zones: Vec<ZoneEntry>,
}

impl ZoneRegistry {
    /// Create the registry with the fixed venue layout
    pub fn new() -> Self {
        let seed: &[(&str, &[&str])] = &[
            ("zone_1", &["cctv_z1_1", "cctv_z1_2"]),
            ("zone_2", &["cctv_z2_1", "cctv_z2_2", "cctv_z2_3"]),
            ("zone_3", &["cctv_z3_1", "cctv_z3_2"]),
            ("zone_4", &["cctv_z4_1", "cctv_z4_2", "cctv_z4_3"]),
            ("zone_5", &["cctv_z5_1", "cctv_z5_2"]),
            ("zone_6", &["cctv_z6_1", "cctv_z6_2"]),
            ("zone_7", &["cctv_z7_1", "cctv_z7_2", "cctv_z7_3"]),
            ("zone_8", &["cctv_z8_1", "cctv_z8_2"]),
            ("zone_9", &["cctv_z9_1", "cctv_z9_2"]),
            ("zone_10", &["cctv_z10_1", "cctv_z10_2", "cctv_z10_3"]),
        ];

        let zones = seed
            .iter()
            .map(|(zone_id, cctvs)| ZoneEntry {
                zone_id: zone_id.to_string(),
                cctv_ids: cctvs.iter().map(|c| c.to_string()).collect(),
            })
            .collect();

        Self { zones }
    }

    /// CCTV ids for a zone, in declaration order
    pub fn cctvs(&self, zone_id: &str) -> Option<&[String]> {
        self.zones
            .iter()
            .find(|z| z.zone_id == zone_id)
            .map(|z| z.cctv_ids.as_slice())
    }

    /// Whether the zone is registered
    pub fn contains_zone(&self, zone_id: &str) -> bool {
        self.zones.iter().any(|z| z.zone_id == zone_id)
    }

    /// All zone ids in declaration order
    pub fn zone_ids(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.zone_id.as_str()).collect()
    }

    /// Number of zones
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Total CCTVs across all zones
    pub fn total_cctv_count(&self) -> usize {
        self.zones.iter().map(|z| z.cctv_ids.len()).sum()
    }

    /// Iterate (zone id, CCTV list) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.zones
            .iter()
            .map(|z| (z.zone_id.as_str(), z.cctv_ids.as_slice()))
    }
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
