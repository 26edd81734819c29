//! Test helper functions shared across integration tests

use std::sync::Once;
use std::time::Duration;

use biblio::{Catalog, CatalogConfig};

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Catalog with a short borrow round trip so tests stay fast
pub fn test_catalog() -> Catalog {
    init_test_logging();
    Catalog::with_config(
        "My Library",
        "New York",
        CatalogConfig::default().with_borrow_latency(Duration::from_millis(10)),
    )
}
