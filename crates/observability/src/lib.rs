//! Tracing/logging setup shared by binaries and integration tests.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, init, init_with_filter};
