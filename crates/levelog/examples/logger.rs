//! Example demonstrating how to use levelog-core
//!
//! This example shows different ways to log:
//!
//! 1. The process-wide default logger (threshold from LOG_LEVEL)
//! 2. A dedicated logger with its own prefix, flags and threshold
//! 3. Reconfiguring the threshold at runtime
//!
//! Run with `LOG_LEVEL=debug cargo run --example logger` to see more lines.

use levelog_core::prelude::*;

fn main()
{
    // Method 1: the default logger, reached through free functions and macros
    levelog_core::mandatory("example started");
    errorf!("this is an error message");
    warnf!("this is a warning message (LOG_LEVEL=warn to see)");
    infof!("this is an info message (LOG_LEVEL=info to see)");
    debugf!("this is a debug message (LOG_LEVEL=debug to see)");
    tracef!("this is a trace message (LOG_LEVEL=trace to see)");

    // Logging an error value
    if let Err(e) = std::fs::read_to_string("/definitely/not/here") {
        levelog_core::error(&e);
    }

    // Method 2: a dedicated logger passed around explicitly
    let worker = FilteringLogger::stderr("[worker] ", Flags::STD | Flags::MSG_PREFIX);
    worker.set_severity(Severity::Info);
    run_job(&worker, 3);

    // Method 3: operator-driven reconfiguration never fails
    worker.set_threshold_by_name("loud"); // unknown: falls back to ERROR
    infof!(worker => "suppressed now, threshold is {}", worker.current_threshold());

    // Raw values are checked
    if let Err(e) = worker.set_threshold(42) {
        worker.print_fmt(format_args!("rejected raw level: {e}"));
    }

    levelog_core::mandatory("example finished");
}

fn run_job(logger: &FilteringLogger, steps: u32)
{
    for step in 1..=steps {
        infof!(logger => "step {step}/{steps}");
        if logger.is_enabled(Severity::Debug) {
            debugf!(logger => "expensive state dump: {:?}", (0..step).collect::<Vec<_>>());
        }
    }
}
