//! Format-string macros.
//!
//! Each leveled macro accepts `format!` syntax and logs on the default
//! logger, or on an explicit logger written before `=>`:
//!
//! ```rust
//! use levelog_core::{warnf, FilteringLogger, Flags};
//!
//! let logger = FilteringLogger::stderr("", Flags::empty());
//! let retries = 2;
//! warnf!("{retries} retries left");
//! warnf!(logger => "{retries} retries left");
//! ```
//!
//! Arguments are only formatted when the line passes the threshold.

/// Log at ERROR with `format!` syntax
#[macro_export]
macro_rules! errorf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.error_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::error_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at MANDATORY with `format!` syntax
#[macro_export]
macro_rules! mandatoryf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.mandatory_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::mandatory_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at WARN with `format!` syntax
#[macro_export]
macro_rules! warnf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.warn_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warn_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at INFO with `format!` syntax
#[macro_export]
macro_rules! infof {
    ($logger:expr => $($arg:tt)+) => {
        $logger.info_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::info_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at DEBUG with `format!` syntax
#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.debug_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug_fmt(::std::format_args!($($arg)+))
    };
}

/// Log at TRACE with `format!` syntax
#[macro_export]
macro_rules! tracef {
    ($logger:expr => $($arg:tt)+) => {
        $logger.trace_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::trace_fmt(::std::format_args!($($arg)+))
    };
}

/// Write unfiltered text with `format!` syntax
#[macro_export]
macro_rules! printf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.print_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::print_fmt(::std::format_args!($($arg)+))
    };
}

/// Write to the default logger and exit with status 1
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatal_fmt(::std::format_args!($($arg)+))
    };
}

/// Write to the default logger and panic with the text
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::panic_fmt(::std::format_args!($($arg)+))
    };
}
