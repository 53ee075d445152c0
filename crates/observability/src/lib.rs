//! Tracing and logging (shared setup).

/// Initialize process-wide tracing using `LOG_FORMAT` from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init(self::tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, formatters).
pub mod tracing;

pub use self::tracing::LogFormat;
