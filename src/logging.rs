//! Logging setup via `tracing`.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber. The level comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
