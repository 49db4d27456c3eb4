//! # Diagnostics
//!
//! Tool-side diagnostics for the levelog binaries, built on `tracing`.
//!
//! The lines a user asks `levelog` to emit go through `levelog-core`; this
//! module only covers what the tool itself reports about its own work
//! (argument resolution, which logger it built). Those diagnostics go to
//! standard error and are silent unless asked for.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: filter for the tool's diagnostics (default: `warn`)
//! - `LEVELOG_DIAG_FORMAT`: `pretty` or `json` (default: `pretty`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use levelog_utils::init_logging;
//!
//! init_logging().expect("Failed to initialize logging");
//! tracing::debug!("resolved threshold");
//! ```

use std::str::FromStr;
use std::{env, io};

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the diagnostics format
pub const DIAG_FORMAT_ENV: &str = "LEVELOG_DIAG_FORMAT";

/// Diagnostics output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat
{
    /// Human-readable lines (default)
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(s.to_string())),
        }
    }
}

/// Initialize diagnostics from the environment
///
/// Reads `LEVELOG_DIAG_FORMAT` (falls back to pretty when unset or invalid)
/// and `RUST_LOG` (falls back to `warn`).
///
/// ## Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> Result<(), LoggingError>
{
    let format = env::var(DIAG_FORMAT_ENV)
        .ok()
        .and_then(|s| LogFormat::from_str(&s).ok())
        .unwrap_or_default();

    init_logging_with_level(Level::WARN, format)
}

/// Initialize diagnostics with an explicit default level and format
///
/// `RUST_LOG`, when set and valid, still overrides `default_level`.
///
/// ## Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_level(default_level: Level, format: LogFormat) -> Result<(), LoggingError>
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let layer = match format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false)
            .with_writer(io::stderr)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    Registry::default()
        .with(layer)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}

/// Diagnostics initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Unknown value for `LEVELOG_DIAG_FORMAT`
    #[error("Invalid log format: {0}. Use 'pretty' or 'json'")]
    InvalidFormat(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),
}
