//! Shared test helpers

use std::panic::Location;
use std::sync::Mutex;

use levelog_core::Sink;

/// One line as seen by the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured
{
    pub call_depth: usize,
    pub file: &'static str,
    pub line_no: u32,
    pub text: String,
}

/// Sink that records every line instead of writing it
#[derive(Debug, Default)]
pub struct CaptureSink
{
    lines: Mutex<Vec<Captured>>,
}

impl CaptureSink
{
    pub fn lines(&self) -> Vec<Captured>
    {
        self.lines.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String>
    {
        self.lines().into_iter().map(|c| c.text).collect()
    }
}

impl Sink for CaptureSink
{
    fn output(&self, call_depth: usize, caller: &'static Location<'static>, line: &str)
    {
        self.lines.lock().unwrap().push(Captured {
            call_depth,
            file: caller.file(),
            line_no: caller.line(),
            text: line.to_string(),
        });
    }
}
