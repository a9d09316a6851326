//! Stdout trace sink.

use dvsim_simulation::TraceSink;

/// Writes each trace line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn println(&mut self, line: &str) {
        println!("{line}");
    }
}
