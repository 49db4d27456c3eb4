//! # levelog Utilities
//!
//! Shared helpers for the levelog binaries.
//!
//! Currently this is the tool's own diagnostics setup, built on `tracing`.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, LogFormat, LoggingError};
pub use tracing::{debug, trace, warn, Level};
