//! Trace output sinks.

use std::sync::{Arc, Mutex};

/// Sink for the simulator's formatted trace output.
///
/// The core pushes pre-formatted lines after dispatched events and node
/// state changes (subject to the configured verbosity); it never reads
/// back. Display concerns — windows, files, stdout — live entirely behind
/// this interface.
pub trait TraceSink {
    /// Accept one line of output, without a trailing newline.
    fn println(&mut self, line: &str);
}

/// Discards all trace output. Useful for tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn println(&mut self, _line: &str) {}
}

/// Collects trace lines in memory, for assertions in tests.
///
/// Cloning yields another handle to the same buffer, so one handle can be
/// given to the runner while the test keeps the other for inspection.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines received so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Whether any received line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .any(|line| line.contains(needle))
    }
}

impl TraceSink for MemorySink {
    fn println(&mut self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
