//! Tracing/logging setup for storefront binaries and harnesses.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Compact human-readable output filtered via `RUST_LOG` (default `info`).
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
