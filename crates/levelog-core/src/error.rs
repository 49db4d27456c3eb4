//! # Error Types
//!
//! Errors reported by the level-configuration entry points.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Most configuration paths are deliberately error-free: setting a threshold
//! by name, or seeding it from `LOG_LEVEL`, normalizes bad input to
//! [`Severity::Error`](crate::Severity::Error) instead of failing. Only the
//! paths that take a raw numeric encoding (or the strict `FromStr` parse)
//! report a problem to the caller.

use thiserror::Error;

/// Error type for level configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError
{
    /// A raw severity encoding outside the defined scale
    ///
    /// Returned by [`FilteringLogger::set_threshold`](crate::FilteringLogger::set_threshold)
    /// and `Severity::try_from(u8)`. When returned by `set_threshold`, the
    /// logger has already been moved to the ERROR threshold, so it is still
    /// in a valid state.
    #[error("invalid log level: {0}")]
    InvalidLevel(u8),

    /// A level name that matches none of the canonical names
    ///
    /// Only produced by the strict `str::parse::<Severity>()`. The lenient
    /// [`Severity::parse_name`](crate::Severity::parse_name) never fails.
    #[error("unknown log level name: {0:?}")]
    UnknownLevelName(String),
}

/// Convenience type alias for `Result<T, LevelError>`
///
/// ```rust
/// use levelog_core::error::LevelResult;
/// fn foo() -> LevelResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type LevelResult<T> = std::result::Result<T, LevelError>;
