//! # Default Logger
//!
//! The process-wide logger and the free functions that forward to it.
//!
//! The default logger writes to standard error with [`Flags::DEFAULT`]
//! (date, time and caller `file:line`) and no prefix. It is created on first
//! use, seeding its threshold from `LOG_LEVEL`, and lives for the rest of the
//! process.
//!
//! Components that log should prefer taking `&FilteringLogger` explicitly and
//! being handed [`default_logger()`] at startup; the free functions exist for
//! call sites where threading a handle through is not worth it.
//!
//! ```rust,no_run
//! use levelog_core as log;
//!
//! log::set_threshold_by_name("info");
//! log::info("starting");
//! log::warn_fmt(format_args!("{} retries left", 2));
//! ```
//!
//! [`fatal`] and [`panic`] are not filtered: they always write, then end the
//! process or unwind.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::process;

use once_cell::sync::Lazy;

use crate::error::LevelResult;
use crate::flags::Flags;
use crate::logger::FilteringLogger;
use crate::severity::Severity;

/// Exit status used by [`fatal`] and [`fatal_fmt`]
pub const FATAL_EXIT_CODE: i32 = 1;

static DEFAULT_LOGGER: Lazy<FilteringLogger> = Lazy::new(|| FilteringLogger::stderr("", Flags::DEFAULT));

/// Handle to the process-wide logger
///
/// The returned logger's sink is a [`TextSink`](crate::TextSink), so its
/// output can be redirected:
///
/// ```rust,no_run
/// let file = std::fs::File::create("app.log")?;
/// levelog_core::default_logger().sink().set_output(file);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn default_logger() -> &'static FilteringLogger
{
    &DEFAULT_LOGGER
}

/// Set the default logger's threshold from a level name. Never fails.
pub fn set_threshold_by_name(name: &str)
{
    DEFAULT_LOGGER.set_threshold_by_name(name);
}

/// Set the default logger's threshold from a raw encoding
///
/// ## Errors
///
/// Returns [`LevelError::InvalidLevel`](crate::LevelError::InvalidLevel) for
/// encodings above TRACE, after setting the threshold to ERROR.
pub fn set_threshold(raw: u8) -> LevelResult<()>
{
    DEFAULT_LOGGER.set_threshold(raw)
}

/// Set the default logger's threshold to a known severity
pub fn set_severity(severity: Severity)
{
    DEFAULT_LOGGER.set_severity(severity);
}

/// The default logger's threshold
pub fn current_threshold() -> Severity
{
    DEFAULT_LOGGER.current_threshold()
}

/// Whether the default logger would write a line at `severity`
pub fn is_enabled(severity: Severity) -> bool
{
    DEFAULT_LOGGER.is_enabled(severity)
}

/// Log an error value at ERROR on the default logger
#[track_caller]
pub fn error<E>(err: &E)
where
    E: StdError + ?Sized,
{
    DEFAULT_LOGGER.emit(Severity::Error, &err);
}

/// Log formatted text at ERROR on the default logger
#[track_caller]
pub fn error_fmt(args: fmt::Arguments<'_>)
{
    DEFAULT_LOGGER.emit(Severity::Error, &args);
}

/// Log a value at MANDATORY on the default logger
#[track_caller]
pub fn mandatory(message: impl Display)
{
    DEFAULT_LOGGER.emit(Severity::Mandatory, &message);
}

/// Log formatted text at MANDATORY on the default logger
#[track_caller]
pub fn mandatory_fmt(args: fmt::Arguments<'_>)
{
    DEFAULT_LOGGER.emit(Severity::Mandatory, &args);
}

/// Log a value at WARN on the default logger
#[track_caller]
pub fn warn(message: impl Display)
{
    DEFAULT_LOGGER.emit(Severity::Warn, &message);
}

/// Log formatted text at WARN on the default logger
#[track_caller]
pub fn warn_fmt(args: fmt::Arguments<'_>)
{
    DEFAULT_LOGGER.emit(Severity::Warn, &args);
}

/// Log a value at INFO on the default logger
#[track_caller]
pub fn info(message: impl Display)
{
    DEFAULT_LOGGER.emit(Severity::Info, &message);
}

/// Log formatted text at INFO on the default logger
#[track_caller]
pub fn info_fmt(args: fmt::Arguments<'_>)
{
    DEFAULT_LOGGER.emit(Severity::Info, &args);
}

/// Log a value at DEBUG on the default logger
#[track_caller]
pub fn debug(message: impl Display)
{
    DEFAULT_LOGGER.emit(Severity::Debug, &message);
}

/// Log formatted text at DEBUG on the default logger
#[track_caller]
pub fn debug_fmt(args: fmt::Arguments<'_>)
{
    DEFAULT_LOGGER.emit(Severity::Debug, &args);
}

/// Log a value at TRACE on the default logger
#[track_caller]
pub fn trace(message: impl Display)
{
    DEFAULT_LOGGER.emit(Severity::Trace, &message);
}

/// Log formatted text at TRACE on the default logger
#[track_caller]
pub fn trace_fmt(args: fmt::Arguments<'_>)
{
    DEFAULT_LOGGER.emit(Severity::Trace, &args);
}

/// Write a value on the default logger regardless of the threshold
#[track_caller]
pub fn print(message: impl Display)
{
    DEFAULT_LOGGER.output_direct(&message);
}

/// Write formatted text on the default logger regardless of the threshold
#[track_caller]
pub fn print_fmt(args: fmt::Arguments<'_>)
{
    DEFAULT_LOGGER.output_direct(&args);
}

/// Write a value, then exit the process with [`FATAL_EXIT_CODE`]
///
/// Not subject to the threshold: the line is written even at NONE.
#[track_caller]
pub fn fatal(message: impl Display) -> !
{
    DEFAULT_LOGGER.output_direct(&message);
    process::exit(FATAL_EXIT_CODE)
}

/// Write formatted text, then exit the process with [`FATAL_EXIT_CODE`]
#[track_caller]
pub fn fatal_fmt(args: fmt::Arguments<'_>) -> !
{
    DEFAULT_LOGGER.output_direct(&args);
    process::exit(FATAL_EXIT_CODE)
}

/// Write a value, then panic with the rendered text as a `String` payload
///
/// Not subject to the threshold. The panic can be observed with
/// `std::panic::catch_unwind` and the payload downcast to `String`.
#[track_caller]
pub fn panic(message: impl Display) -> !
{
    let text = message.to_string();
    DEFAULT_LOGGER.output_direct(&text);
    std::panic::panic_any(text)
}

/// Write formatted text, then panic with it as a `String` payload
#[track_caller]
pub fn panic_fmt(args: fmt::Arguments<'_>) -> !
{
    let text = args.to_string();
    DEFAULT_LOGGER.output_direct(&text);
    std::panic::panic_any(text)
}
