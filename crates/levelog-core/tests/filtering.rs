//! Tests for threshold filtering on independent logger instances

mod common;

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::CaptureSink;
use levelog_core::logger::CALL_DEPTH;
use levelog_core::{debugf, errorf, infof, mandatoryf, printf, tracef, warnf};
use levelog_core::{FilteringLogger, LevelError, Severity};

fn logger_at(name: &str) -> FilteringLogger<CaptureSink>
{
    FilteringLogger::with_level_name(CaptureSink::default(), name)
}

fn emit(logger: &FilteringLogger<CaptureSink>, severity: Severity)
{
    match severity {
        Severity::None => {}
        Severity::Mandatory => logger.mandatory("m"),
        Severity::Error => logger.error_fmt(format_args!("e")),
        Severity::Warn => logger.warn("w"),
        Severity::Info => logger.info("i"),
        Severity::Debug => logger.debug("d"),
        Severity::Trace => logger.trace("t"),
    }
}

/// Display impl that counts how often it was rendered
struct Counted(Arc<AtomicUsize>);

impl fmt::Display for Counted
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        self.0.fetch_add(1, Ordering::SeqCst);
        f.write_str("counted")
    }
}

#[test]
fn test_emission_iff_severity_within_threshold()
{
    for threshold in Severity::ALL {
        for severity in Severity::ALL.into_iter().skip(1) {
            let logger = logger_at(threshold.name());
            emit(&logger, severity);
            let written = logger.sink().lines().len();
            assert_eq!(
                written == 1,
                severity <= threshold,
                "severity {severity} at threshold {threshold}"
            );
        }
    }
}

#[test]
fn test_none_suppresses_mandatory()
{
    let logger = logger_at("NONE");
    logger.mandatory("still here?");
    mandatoryf!(logger => "{}", 1);
    errorf!(logger => "boom");
    assert!(logger.sink().lines().is_empty());
}

#[test]
fn test_mandatory_written_at_every_other_threshold()
{
    for threshold in Severity::ALL.into_iter().skip(1) {
        let logger = FilteringLogger::with_level_name(CaptureSink::default(), "");
        logger.set_severity(threshold);
        logger.mandatory("always");
        assert_eq!(logger.sink().texts(), vec!["MANDATORY - always".to_string()]);
    }
}

#[test]
fn test_unset_threshold_scenario()
{
    let logger = logger_at("");
    assert_eq!(logger.current_threshold(), Severity::Error);

    logger.warn("not yet");
    assert!(logger.sink().lines().is_empty());

    let err = io::Error::new(io::ErrorKind::Other, "disk full");
    logger.error(&err);
    assert_eq!(logger.sink().texts(), vec!["ERROR - disk full".to_string()]);
}

#[test]
fn test_debug_threshold_scenario()
{
    let logger = logger_at("");
    logger.set_threshold_by_name("debug");

    logger.info("one");
    debugf!(logger => "two {}", 2);
    assert_eq!(
        logger.sink().texts(),
        vec!["INFO - one".to_string(), "DEBUG - two 2".to_string()]
    );

    logger.trace("three");
    tracef!(logger => "three {}", 3);
    assert_eq!(logger.sink().lines().len(), 2);
}

#[test]
fn test_out_of_range_value_scenario()
{
    let logger = logger_at("trace");
    assert_eq!(logger.set_threshold(254), Err(LevelError::InvalidLevel(254)));
    assert_eq!(logger.current_threshold(), Severity::Error);
}

#[test]
fn test_set_threshold_valid_values()
{
    let logger = logger_at("");
    for severity in Severity::ALL {
        assert_eq!(logger.set_threshold(severity.as_u8()), Ok(()));
        assert_eq!(logger.current_threshold(), severity);
    }
    assert_eq!(logger.set_threshold(7), Err(LevelError::InvalidLevel(7)));
    assert_eq!(logger.current_threshold(), Severity::Error);
}

#[test]
fn test_name_setter_never_fails()
{
    let logger = logger_at("trace");
    for name in ["NONE", "error", "Warn", "info", "DEBUG", "trace", "INVALIDLOGLEVEL", ""] {
        logger.set_threshold_by_name(name);
        assert_eq!(logger.current_threshold(), Severity::parse_name(name));
    }
    assert_eq!(logger.current_threshold(), Severity::Error);
}

#[test]
fn test_suppressed_lines_are_not_formatted()
{
    let renders = Arc::new(AtomicUsize::new(0));
    let logger = logger_at("error");

    logger.debug(Counted(renders.clone()));
    infof!(logger => "{}", Counted(renders.clone()));
    logger.trace_fmt(format_args!("{}", Counted(renders.clone())));
    assert_eq!(renders.load(Ordering::SeqCst), 0);
    assert!(logger.sink().lines().is_empty());

    logger.mandatory(Counted(renders.clone()));
    assert_eq!(renders.load(Ordering::SeqCst), 1);
    assert_eq!(logger.sink().texts(), vec!["MANDATORY - counted".to_string()]);
}

#[test]
fn test_formatted_and_plain_variants()
{
    let logger = logger_at("trace");
    warnf!(logger => "{} of {}", 1, 2);
    logger.warn(42);
    logger.info_fmt(format_args!("{:>4}", "x"));
    logger.debug_fmt(format_args!("{:?}", Some(1)));

    assert_eq!(
        logger.sink().texts(),
        vec![
            "WARN - 1 of 2".to_string(),
            "WARN - 42".to_string(),
            "INFO -    x".to_string(),
            "DEBUG - Some(1)".to_string(),
        ]
    );
}

#[test]
fn test_print_ignores_threshold()
{
    let logger = logger_at("none");
    logger.print("bypass");
    printf!(logger => "bypass {}", 2);
    assert_eq!(
        logger.sink().texts(),
        vec!["bypass".to_string(), "bypass 2".to_string()]
    );
}

#[test]
fn test_caller_location_is_user_code()
{
    let logger = logger_at("info");
    let expected_line = line!() + 1;
    logger.info("here");
    infof!(logger => "and {}", "here");

    let lines = logger.sink().lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].file.ends_with("filtering.rs"), "{}", lines[0].file);
    assert_eq!(lines[0].line_no, expected_line);
    assert_eq!(lines[1].line_no, expected_line + 1);
    assert_eq!(lines[0].call_depth, CALL_DEPTH);
}

#[test]
fn test_is_enabled_tracks_threshold()
{
    let logger = logger_at("warn");
    assert!(logger.is_enabled(Severity::Mandatory));
    assert!(logger.is_enabled(Severity::Warn));
    assert!(!logger.is_enabled(Severity::Info));

    logger.set_severity(Severity::None);
    assert!(!logger.is_enabled(Severity::Mandatory));
}

#[test]
fn test_independent_instances()
{
    let quiet = logger_at("error");
    let chatty = logger_at("trace");

    quiet.debug("x");
    chatty.debug("x");
    assert!(quiet.sink().lines().is_empty());
    assert_eq!(chatty.sink().lines().len(), 1);
}

#[test]
fn test_shared_across_threads()
{
    let logger = Arc::new(logger_at("info"));
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for n in 0..25 {
                    infof!(logger => "thread {id} line {n}");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(logger.sink().lines().len(), 100);
}
