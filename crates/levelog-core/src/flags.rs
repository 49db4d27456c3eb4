//! Header flags for [`TextSink`](crate::sink::TextSink) lines.

use bitflags::bitflags;

bitflags! {
    /// Controls which header fields a [`TextSink`](crate::sink::TextSink)
    /// renders before each line.
    ///
    /// With `DATE | TIME | SHORT_FILE` a line looks like:
    ///
    /// ```text
    /// 2009/01/23 01:23:23 main.rs:42: ERROR - disk full
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Local date, `2009/01/23`
        const DATE = 1 << 0;
        /// Local time, `01:23:23`
        const TIME = 1 << 1;
        /// Microsecond resolution, `01:23:23.123123`; implies `TIME`
        const MICROSECONDS = 1 << 2;
        /// Full file path and line, `/a/b/c/main.rs:42`
        const LONG_FILE = 1 << 3;
        /// Final path element and line, `main.rs:42`; overrides `LONG_FILE`
        const SHORT_FILE = 1 << 4;
        /// Use UTC instead of the local time zone
        const UTC = 1 << 5;
        /// Move the prefix from the start of the line to just before the message
        const MSG_PREFIX = 1 << 6;
        /// Date and time
        const STD = Self::DATE.bits() | Self::TIME.bits();
        /// Date, time and caller file:line, used by the default logger
        const DEFAULT = Self::STD.bits() | Self::SHORT_FILE.bits();
    }
}

impl Flags
{
    /// Whether any timestamp field is rendered
    pub fn has_timestamp(self) -> bool
    {
        self.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS)
    }

    /// Whether a file:line annotation is rendered
    pub fn has_location(self) -> bool
    {
        self.intersects(Flags::LONG_FILE | Flags::SHORT_FILE)
    }
}

impl Default for Flags
{
    fn default() -> Self
    {
        Flags::DEFAULT
    }
}
