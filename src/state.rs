//! Application state
//!
//! Holds configuration and the shared zone registry

use std::sync::Arc;

use crate::zone_registry::ZoneRegistry;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server port
    pub port: u16,
    /// Server host
    pub host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Zone registry (read-only venue layout)
    pub registry: Arc<ZoneRegistry>,
}

impl AppState {
    /// Create state with the fixed venue registry
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registry: Arc::new(ZoneRegistry::new()),
        }
    }
}
