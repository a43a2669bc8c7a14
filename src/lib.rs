//! Crowd Density Mock Service
//!
//! Simulates a crowd-density sensing network for a venue split into zones,
//! each with a small fixed set of CCTV sensors.
//!
//! ## Architecture (4 Components)
//!
//! 1. ZoneRegistry - Static zone -> CCTV mapping (SSoT for the venue layout)
//! 2. DensityGenerator - Synthetic per-CCTV occupancy readings
//! 3. ZoneAggregator - Per-zone rollup of generated readings
//! 4. WebAPI - REST API endpoints
//!
//! ## Design Principles
//!
//! - SSoT: ZoneRegistry is the single source of truth for zone membership
//! - Stateless: every reading is generated fresh, nothing persists between requests

pub mod density_generator;
pub mod error;
pub mod models;
pub mod state;
pub mod web_api;
pub mod zone_aggregator;
pub mod zone_registry;

pub use error::{Error, Result};
pub use state::AppState;
