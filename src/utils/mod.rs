//! Utilities module for logging and error handling
//!
//! - Structured logging with tracing (stderr only)
//! - Error types shared by the pipeline and the binaries
//! - Panic containment around framework calls

pub mod error;
pub mod logging;

// Re-export main types for convenience
pub use error::{ErrorKind, PredictError, Result};
pub use logging::{init_logging, LogConfig, LogLevel};

/// Run `f`, turning a panic into an error message
///
/// Burn reports shape and record mismatches by panicking.
pub fn catch_panic<T>(f: impl FnOnce() -> T) -> std::result::Result<T, String> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string())
    })
}
