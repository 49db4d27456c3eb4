//! # Filtering Logger
//!
//! A severity threshold in front of a [`Sink`].
//!
//! Every emission method compares its severity against the stored threshold
//! and returns immediately when the line is not permitted. Message arguments
//! are passed as `impl Display` or `fmt::Arguments`, both of which are lazy,
//! so a suppressed call performs no formatting work at all.
//!
//! ## Threshold configuration
//!
//! There are two setters with intentionally different contracts:
//!
//! - [`FilteringLogger::set_threshold_by_name`] takes operator text (a config
//!   reload, an environment variable) and never fails. Unknown names become
//!   ERROR.
//! - [`FilteringLogger::set_threshold`] takes a raw numeric encoding from
//!   code. Out-of-range values also become ERROR, but the caller gets
//!   [`LevelError::InvalidLevel`] back so the mistake is visible.
//!
//! ## Thread Safety
//!
//! The threshold is an atomic with relaxed ordering. A thread emitting while
//! another changes the threshold may observe the old value for a short while;
//! there is no ordering guarantee between a threshold update and emissions on
//! other threads. Write serialization is the sink's responsibility.

use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io::Write;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::Lazy;

use crate::error::{LevelError, LevelResult};
use crate::flags::Flags;
use crate::severity::Severity;
use crate::sink::{Sink, TextSink};

/// Environment variable seeding the initial threshold
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Frames from `Sink::output` back to the user's call site:
/// user code -> public method -> `emit`/`output_direct` -> `Sink::output`.
///
/// Every public entry point, including the free functions and `print`,
/// keeps exactly this chain.
pub const CALL_DEPTH: usize = 3;

// Read once per process; every constructor reuses it.
static LOG_LEVEL_CONFIG: Lazy<String> = Lazy::new(|| env::var(LOG_LEVEL_ENV).unwrap_or_default());

/// Value of `LOG_LEVEL` captured at first use, empty if unset or not UTF-8
pub fn env_level_name() -> &'static str
{
    &LOG_LEVEL_CONFIG
}

/// Logger that drops lines more permissive than its threshold
///
/// The threshold is always a valid [`Severity`]; every setter normalizes bad
/// input to [`Severity::Error`].
///
/// ## Example
///
/// ```rust
/// use levelog_core::{Flags, FilteringLogger, Severity};
///
/// let logger = FilteringLogger::stderr("", Flags::DEFAULT);
/// logger.set_threshold_by_name("debug");
/// assert_eq!(logger.current_threshold(), Severity::Debug);
///
/// logger.info("listening");          // emitted
/// logger.trace_fmt(format_args!("{} bytes", 42)); // suppressed, not formatted
/// ```
pub struct FilteringLogger<S: Sink = TextSink>
{
    threshold: AtomicU8,
    sink: S,
}

impl<S: Sink> fmt::Debug for FilteringLogger<S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("FilteringLogger")
            .field("threshold", &self.current_threshold())
            .finish_non_exhaustive()
    }
}

impl FilteringLogger<TextSink>
{
    /// Create a logger writing to `writer`
    ///
    /// The prefix and flags configure the underlying [`TextSink`] and are
    /// fixed for the logger's lifetime. The threshold is seeded from
    /// `LOG_LEVEL`; if it is unset or unrecognized the threshold is ERROR.
    pub fn new<W>(writer: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_sink(TextSink::new(writer, prefix, flags))
    }

    /// Create a logger writing to standard error
    pub fn stderr(prefix: impl Into<String>, flags: Flags) -> Self
    {
        Self::with_sink(TextSink::stderr(prefix, flags))
    }
}

impl<S: Sink> FilteringLogger<S>
{
    /// Wrap an arbitrary sink, seeding the threshold from `LOG_LEVEL`
    pub fn with_sink(sink: S) -> Self
    {
        Self::with_level_name(sink, env_level_name())
    }

    /// Wrap an arbitrary sink, seeding the threshold from `name`
    ///
    /// `name` goes through the same lenient parse as
    /// [`set_threshold_by_name`](Self::set_threshold_by_name).
    pub fn with_level_name(sink: S, name: &str) -> Self
    {
        let logger = Self {
            threshold: AtomicU8::new(Severity::Error.as_u8()),
            sink,
        };
        logger.set_threshold_by_name(name);
        logger
    }

    /// The sink lines are forwarded to
    pub fn sink(&self) -> &S
    {
        &self.sink
    }

    /// Current threshold
    pub fn current_threshold(&self) -> Severity
    {
        // Only valid encodings are ever stored.
        Severity::from_raw(self.threshold.load(Ordering::Relaxed)).unwrap_or(Severity::Error)
    }

    /// Set the threshold from a level name
    ///
    /// Case-insensitive. Unrecognized names, including the empty string, set
    /// the threshold to ERROR. Never fails, so it is safe to call with
    /// operator-supplied configuration on a hot reload.
    pub fn set_threshold_by_name(&self, name: &str)
    {
        self.set_severity(Severity::parse_name(name));
    }

    /// Set the threshold from a raw severity encoding
    ///
    /// ## Errors
    ///
    /// Returns [`LevelError::InvalidLevel`] if `raw` is above
    /// [`Severity::MOST_PERMISSIVE`]. The threshold is set to ERROR in that
    /// case, so the logger is still usable after the error.
    pub fn set_threshold(&self, raw: u8) -> LevelResult<()>
    {
        match Severity::from_raw(raw) {
            Some(severity) => {
                self.set_severity(severity);
                Ok(())
            }
            None => {
                self.set_severity(Severity::Error);
                Err(LevelError::InvalidLevel(raw))
            }
        }
    }

    /// Set the threshold to a known severity
    pub fn set_severity(&self, severity: Severity)
    {
        self.threshold.store(severity.as_u8(), Ordering::Relaxed);
    }

    /// Whether a line at `severity` would currently be written
    ///
    /// Useful to skip preparing expensive arguments.
    pub fn is_enabled(&self, severity: Severity) -> bool
    {
        severity <= self.current_threshold()
    }

    /// Filter, render and forward one line
    #[track_caller]
    pub(crate) fn emit(&self, severity: Severity, message: &dyn Display)
    {
        if !self.is_enabled(severity) {
            return;
        }
        let line = format!("{} - {message}", severity.name());
        self.sink.output(CALL_DEPTH, Location::caller(), &line);
    }

    /// Forward one line without a severity prefix or filtering
    #[track_caller]
    pub(crate) fn output_direct(&self, message: &dyn Display)
    {
        self.sink.output(CALL_DEPTH, Location::caller(), &message.to_string());
    }

    /// Log an error value at ERROR
    #[track_caller]
    pub fn error<E>(&self, err: &E)
    where
        E: StdError + ?Sized,
    {
        self.emit(Severity::Error, &err);
    }

    /// Log formatted text at ERROR
    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.emit(Severity::Error, &args);
    }

    /// Log a value at MANDATORY, written unless the threshold is NONE
    #[track_caller]
    pub fn mandatory(&self, message: impl Display)
    {
        self.emit(Severity::Mandatory, &message);
    }

    /// Log formatted text at MANDATORY, written unless the threshold is NONE
    #[track_caller]
    pub fn mandatory_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.emit(Severity::Mandatory, &args);
    }

    /// Log a value at WARN
    #[track_caller]
    pub fn warn(&self, message: impl Display)
    {
        self.emit(Severity::Warn, &message);
    }

    /// Log formatted text at WARN
    #[track_caller]
    pub fn warn_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.emit(Severity::Warn, &args);
    }

    /// Log a value at INFO
    #[track_caller]
    pub fn info(&self, message: impl Display)
    {
        self.emit(Severity::Info, &message);
    }

    /// Log formatted text at INFO
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.emit(Severity::Info, &args);
    }

    /// Log a value at DEBUG
    #[track_caller]
    pub fn debug(&self, message: impl Display)
    {
        self.emit(Severity::Debug, &message);
    }

    /// Log formatted text at DEBUG
    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.emit(Severity::Debug, &args);
    }

    /// Log a value at TRACE
    #[track_caller]
    pub fn trace(&self, message: impl Display)
    {
        self.emit(Severity::Trace, &message);
    }

    /// Log formatted text at TRACE
    #[track_caller]
    pub fn trace_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.emit(Severity::Trace, &args);
    }

    /// Write a value regardless of the threshold, without a severity prefix
    #[track_caller]
    pub fn print(&self, message: impl Display)
    {
        self.output_direct(&message);
    }

    /// Write formatted text regardless of the threshold, without a severity prefix
    #[track_caller]
    pub fn print_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.output_direct(&args);
    }
}
