//! # levelog-core
//!
//! Leveled logging over a plain text sink.
//!
//! This crate provides:
//! - A seven-step severity scale, `NONE < MANDATORY < ERROR < WARN < INFO < DEBUG < TRACE`
//! - [`FilteringLogger`], which drops lines more permissive than its threshold
//! - Threshold configuration by name (lenient) or by raw value (checked)
//! - A process-wide default logger seeded from the `LOG_LEVEL` environment
//!   variable, with free functions and `format!`-style macros that forward to it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use levelog_core::{errorf, infof};
//!
//! // LOG_LEVEL=info ./app
//! infof!("listening on {}", "127.0.0.1:8080");
//!
//! if let Err(e) = std::fs::read("missing.toml") {
//!     levelog_core::error(&e);
//! }
//! errorf!("giving up after {} attempts", 3);
//! ```
//!
//! ## Runtime reconfiguration
//!
//! ```rust,no_run
//! // e.g. on SIGHUP, with the new value read from a config file
//! levelog_core::set_threshold_by_name("debug");
//! ```
//!
//! Lines are written synchronously on the calling thread. Nothing here
//! spawns threads or buffers output.

pub mod error;
pub mod flags;
pub mod global;
pub mod logger;
mod macros;
pub mod prelude;
pub mod severity;
pub mod sink;

pub use error::{LevelError, LevelResult};
pub use flags::Flags;
pub use global::{
    current_threshold, debug, debug_fmt, default_logger, error, error_fmt, fatal, fatal_fmt, info, info_fmt,
    is_enabled, mandatory, mandatory_fmt, panic, panic_fmt, print, print_fmt, set_severity, set_threshold,
    set_threshold_by_name, trace, trace_fmt, warn, warn_fmt, FATAL_EXIT_CODE,
};
pub use logger::{FilteringLogger, LOG_LEVEL_ENV};
pub use severity::Severity;
pub use sink::{Sink, TextSink};
