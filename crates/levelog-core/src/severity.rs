//! # Severity Scale
//!
//! The ordered set of severities and their canonical names.
//!
//! Severities are ordered from most restrictive to most permissive:
//!
//! ```text
//! NONE < MANDATORY < ERROR < WARN < INFO < DEBUG < TRACE
//! ```
//!
//! A logger configured with threshold `T` emits a call at severity `S` when
//! `S <= T`. `NONE` as a threshold therefore suppresses everything, and
//! `MANDATORY` is emitted at every other threshold.

use std::fmt;
use std::str::FromStr;

use crate::error::{LevelError, LevelResult};

/// A diagnostic severity
///
/// The numeric encoding (`as u8`) is stable and grows with permissiveness.
/// Values outside `0..=6` never become a `Severity`.
///
/// ## Example
///
/// ```rust
/// use levelog_core::Severity;
///
/// assert!(Severity::Error < Severity::Debug);
/// assert_eq!(Severity::parse_name("debug"), Severity::Debug);
/// assert_eq!(Severity::Warn.prefix(), "WARN - ");
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity
{
    /// Suppress everything, including mandatory lines
    None = 0,
    /// Emitted at every threshold except `None`
    Mandatory = 1,
    /// Default threshold
    #[default]
    Error = 2,
    /// Warnings
    Warn = 3,
    /// Informational messages
    Info = 4,
    /// Debug output
    Debug = 5,
    /// Most verbose
    Trace = 6,
}

const NAME_NONE: &str = "NONE";
const NAME_MANDATORY: &str = "MANDATORY";
const NAME_ERROR: &str = "ERROR";
const NAME_WARN: &str = "WARN";
const NAME_INFO: &str = "INFO";
const NAME_DEBUG: &str = "DEBUG";
const NAME_TRACE: &str = "TRACE";

// Older configurations spell the mandatory level this way.
const ALIAS_MANDATORY: &str = "NOTICE";

impl Severity
{
    /// Every severity, most restrictive first.
    pub const ALL: [Severity; 7] = [
        Severity::None,
        Severity::Mandatory,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// The most permissive severity.
    pub const MOST_PERMISSIVE: Severity = Severity::Trace;

    /// Canonical uppercase name
    pub const fn name(self) -> &'static str
    {
        match self {
            Severity::None => NAME_NONE,
            Severity::Mandatory => NAME_MANDATORY,
            Severity::Error => NAME_ERROR,
            Severity::Warn => NAME_WARN,
            Severity::Info => NAME_INFO,
            Severity::Debug => NAME_DEBUG,
            Severity::Trace => NAME_TRACE,
        }
    }

    /// Prefix rendered before the message text, e.g. `"ERROR - "`
    pub fn prefix(self) -> String
    {
        format!("{} - ", self.name())
    }

    /// Stable numeric encoding
    pub const fn as_u8(self) -> u8
    {
        self as u8
    }

    /// Decode a raw encoding, `None` if it is outside the scale
    pub const fn from_raw(raw: u8) -> Option<Severity>
    {
        match raw {
            0 => Some(Severity::None),
            1 => Some(Severity::Mandatory),
            2 => Some(Severity::Error),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Info),
            5 => Some(Severity::Debug),
            6 => Some(Severity::Trace),
            _ => None,
        }
    }

    /// Parse a level name, falling back to ERROR
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Any
    /// unrecognized input, including the empty string, yields
    /// [`Severity::Error`]. This never fails: it is the path used for
    /// operator-supplied text such as the `LOG_LEVEL` variable, where a typo
    /// must not leave the logger unconfigured.
    ///
    /// ```rust
    /// use levelog_core::Severity;
    ///
    /// assert_eq!(Severity::parse_name("Trace"), Severity::Trace);
    /// assert_eq!(Severity::parse_name("BOGUS"), Severity::Error);
    /// assert_eq!(Severity::parse_name(""), Severity::Error);
    /// ```
    pub fn parse_name(text: &str) -> Severity
    {
        Self::lookup(text).unwrap_or(Severity::Error)
    }

    fn lookup(text: &str) -> Option<Severity>
    {
        let text = text.trim();
        if text.eq_ignore_ascii_case(ALIAS_MANDATORY) {
            return Some(Severity::Mandatory);
        }
        Severity::ALL
            .into_iter()
            .find(|severity| text.eq_ignore_ascii_case(severity.name()))
    }
}

/// Name for a raw encoding
///
/// Total over every `u8`: encodings outside the scale render as `"ERROR"`,
/// the default operating threshold.
///
/// ```rust
/// use levelog_core::severity::severity_name;
///
/// assert_eq!(severity_name(4), "INFO");
/// assert_eq!(severity_name(200), "ERROR");
/// ```
pub const fn severity_name(raw: u8) -> &'static str
{
    match Severity::from_raw(raw) {
        Some(severity) => severity.name(),
        None => NAME_ERROR,
    }
}

impl fmt::Display for Severity
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

impl From<Severity> for u8
{
    fn from(severity: Severity) -> Self
    {
        severity.as_u8()
    }
}

impl TryFrom<u8> for Severity
{
    type Error = LevelError;

    fn try_from(raw: u8) -> LevelResult<Self>
    {
        Severity::from_raw(raw).ok_or(LevelError::InvalidLevel(raw))
    }
}

/// Strict parse: unknown names are an error instead of ERROR
impl FromStr for Severity
{
    type Err = LevelError;

    fn from_str(s: &str) -> LevelResult<Self>
    {
        Severity::lookup(s).ok_or_else(|| LevelError::UnknownLevelName(s.to_string()))
    }
}
