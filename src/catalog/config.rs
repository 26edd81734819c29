//! Catalog configuration.

use std::time::Duration;

/// Tunables for a catalog instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Bound on the simulated backend round trip performed by `borrow`
    pub borrow_latency: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            // Typical round trip of the circulation backend
            borrow_latency: Duration::from_secs(2),
        }
    }
}

impl CatalogConfig {
    pub fn with_borrow_latency(mut self, latency: Duration) -> Self {
        self.borrow_latency = latency;
        self
    }
}
