//! Tracing/logging initialization.
//!
//! JSON lines on stdout, filtered through `RUST_LOG` (falling back to
//! [`DEFAULT_FILTER`]). The inventory service logs rejected operations at
//! `debug` and completed mutations at `info`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize tracing with an explicit filter directive, ignoring `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with_filter(directive: &str) -> bool {
    install(EnvFilter::new(directive))
}

fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}
