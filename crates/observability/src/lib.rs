//! Tracing and logging setup for processes embedding the getters.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! host process's decision.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&tracing::TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::TracingConfig;
