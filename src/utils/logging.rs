//! Tracing subscriber setup for binaries.

use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    init_logging_with_default("info");
}

/// Installs a formatted subscriber honouring `RUST_LOG`, falling back to
/// `default_filter`. A second call is a no-op.
pub fn init_logging_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
