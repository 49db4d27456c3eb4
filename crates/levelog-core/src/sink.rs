//! # Output Sinks
//!
//! The text-writing side of the logger.
//!
//! A [`FilteringLogger`](crate::FilteringLogger) decides *whether* a line is
//! written; a [`Sink`] decides *how*. The logger hands the sink a fully
//! rendered line (`"WARN - disk almost full"`), the caller's source location
//! and a call-depth hint, and never looks at what the sink does with them.
//!
//! [`TextSink`] is the stock implementation: it renders an optional header
//! (prefix, date, time, `file:line`) and writes the line to any
//! `Write + Send` destination, serializing concurrent writes with a mutex.
//!
//! ## Why use a trait?
//!
//! Composition keeps the filtering engine independent of the output format,
//! and lets tests substitute a capturing fake:
//!
//! ```rust
//! use std::panic::Location;
//! use std::sync::Mutex;
//!
//! use levelog_core::{FilteringLogger, Sink};
//!
//! #[derive(Default)]
//! struct Capture(Mutex<Vec<String>>);
//!
//! impl Sink for Capture
//! {
//!     fn output(&self, _call_depth: usize, _caller: &'static Location<'static>, line: &str)
//!     {
//!         self.0.lock().unwrap().push(line.to_string());
//!     }
//! }
//!
//! let logger = FilteringLogger::with_level_name(Capture::default(), "info");
//! logger.info("ready");
//! assert_eq!(*logger.sink().0.lock().unwrap(), vec!["INFO - ready".to_string()]);
//! ```

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Local, NaiveDateTime, Utc};

use crate::flags::Flags;

/// Destination for rendered log lines
///
/// Implementations must be shareable across threads: the default logger is a
/// process-wide static.
pub trait Sink: Send + Sync
{
    /// Write one rendered line
    ///
    /// ## Parameters
    ///
    /// - `call_depth`: number of frames between the user's call site and this
    ///   method. Sinks that resolve source locations by walking the stack use
    ///   it to skip the logger's own frames.
    /// - `caller`: the user's call site, already resolved through
    ///   `#[track_caller]`.
    /// - `line`: the message, severity prefix included, without a trailing
    ///   newline (unless the message itself ended with one).
    fn output(&self, call_depth: usize, caller: &'static Location<'static>, line: &str);
}

impl<S: Sink + ?Sized> Sink for Arc<S>
{
    fn output(&self, call_depth: usize, caller: &'static Location<'static>, line: &str)
    {
        (**self).output(call_depth, caller, line);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S>
{
    fn output(&self, call_depth: usize, caller: &'static Location<'static>, line: &str)
    {
        (**self).output(call_depth, caller, line);
    }
}

type Writer = Box<dyn Write + Send>;

/// Writer-backed sink with a configurable line header
///
/// The prefix and flags are fixed at construction. The destination can be
/// swapped at runtime with [`TextSink::set_output`].
///
/// ## Example
///
/// ```rust
/// use levelog_core::{Flags, TextSink};
///
/// let sink = TextSink::stderr("[worker] ", Flags::STD);
/// assert_eq!(sink.prefix(), "[worker] ");
/// assert_eq!(sink.flags(), Flags::STD);
/// ```
pub struct TextSink
{
    prefix: String,
    flags: Flags,
    out: Mutex<Writer>,
}

impl fmt::Debug for TextSink
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("TextSink")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl TextSink
{
    /// Create a sink writing to `writer`
    pub fn new<W>(writer: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            prefix: prefix.into(),
            flags,
            out: Mutex::new(Box::new(writer)),
        }
    }

    /// Create a sink writing to standard error
    pub fn stderr(prefix: impl Into<String>, flags: Flags) -> Self
    {
        Self::new(io::stderr(), prefix, flags)
    }

    /// Line prefix
    pub fn prefix(&self) -> &str
    {
        &self.prefix
    }

    /// Header flags
    pub fn flags(&self) -> Flags
    {
        self.flags
    }

    /// Redirect subsequent lines to `writer`
    ///
    /// The previous destination is dropped once the swap completes.
    pub fn set_output<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        *out = Box::new(writer);
    }

    fn now(&self) -> NaiveDateTime
    {
        if self.flags.contains(Flags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }

    /// Render a complete line, header and trailing newline included
    pub(crate) fn render(&self, now: NaiveDateTime, caller: &Location<'_>, line: &str) -> String
    {
        let mut buf = String::with_capacity(self.prefix.len() + line.len() + 48);

        if !self.flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }

        if self.flags.contains(Flags::DATE) {
            buf.push_str(&now.format("%Y/%m/%d ").to_string());
        }
        if self.flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            if self.flags.contains(Flags::MICROSECONDS) {
                buf.push_str(&now.format("%H:%M:%S%.6f ").to_string());
            } else {
                buf.push_str(&now.format("%H:%M:%S ").to_string());
            }
        }

        if self.flags.has_location() {
            let file = if self.flags.contains(Flags::SHORT_FILE) {
                short_file(caller.file())
            } else {
                caller.file()
            };
            buf.push_str(&format!("{file}:{}: ", caller.line()));
        }

        if self.flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }

        buf.push_str(line);
        if !line.ends_with('\n') {
            buf.push('\n');
        }
        buf
    }
}

impl Sink for TextSink
{
    fn output(&self, _call_depth: usize, caller: &'static Location<'static>, line: &str)
    {
        let now = if self.flags.has_timestamp() {
            self.now()
        } else {
            NaiveDateTime::default()
        };
        let rendered = self.render(now, caller, line);

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // Nothing upstream can act on a failed diagnostic write.
        let _ = out.write_all(rendered.as_bytes());
    }
}

/// Final path element of a source file
fn short_file(path: &str) -> &str
{
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests
{
    use chrono::NaiveDate;

    use super::*;

    fn fixed_time() -> NaiveDateTime
    {
        NaiveDate::from_ymd_opt(2009, 1, 23)
            .unwrap()
            .and_hms_micro_opt(1, 23, 23, 123_123)
            .unwrap()
    }

    #[test]
    fn test_render_no_flags()
    {
        let sink = TextSink::new(io::sink(), "", Flags::empty());
        let line = sink.render(fixed_time(), Location::caller(), "ERROR - boom");
        assert_eq!(line, "ERROR - boom\n");
    }

    #[test]
    fn test_render_std_flags()
    {
        let sink = TextSink::new(io::sink(), "app: ", Flags::STD);
        let line = sink.render(fixed_time(), Location::caller(), "WARN - careful");
        assert_eq!(line, "app: 2009/01/23 01:23:23 WARN - careful\n");
    }

    #[test]
    fn test_render_microseconds()
    {
        let sink = TextSink::new(io::sink(), "", Flags::MICROSECONDS);
        let line = sink.render(fixed_time(), Location::caller(), "x");
        assert_eq!(line, "01:23:23.123123 x\n");
    }

    #[test]
    fn test_render_short_file()
    {
        let sink = TextSink::new(io::sink(), "", Flags::SHORT_FILE | Flags::LONG_FILE);
        let caller = Location::caller();
        let line = sink.render(fixed_time(), caller, "x");
        assert_eq!(line, format!("sink.rs:{}: x\n", caller.line()));
    }

    #[test]
    fn test_render_long_file()
    {
        let sink = TextSink::new(io::sink(), "", Flags::LONG_FILE);
        let caller = Location::caller();
        let line = sink.render(fixed_time(), caller, "x");
        assert_eq!(line, format!("{}:{}: x\n", caller.file(), caller.line()));
    }

    #[test]
    fn test_render_msg_prefix()
    {
        let sink = TextSink::new(io::sink(), "[svc] ", Flags::DATE | Flags::MSG_PREFIX);
        let line = sink.render(fixed_time(), Location::caller(), "INFO - up");
        assert_eq!(line, "2009/01/23 [svc] INFO - up\n");
    }

    #[test]
    fn test_render_keeps_existing_newline()
    {
        let sink = TextSink::new(io::sink(), "", Flags::empty());
        let line = sink.render(fixed_time(), Location::caller(), "done\n");
        assert_eq!(line, "done\n");
    }

    #[test]
    fn test_short_file()
    {
        assert_eq!(short_file("src/a/b.rs"), "b.rs");
        assert_eq!(short_file(r"src\a\b.rs"), "b.rs");
        assert_eq!(short_file("b.rs"), "b.rs");
    }
}
