//! Tracing output for tests, filtered by RUST_LOG

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that writes through the test harness
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
