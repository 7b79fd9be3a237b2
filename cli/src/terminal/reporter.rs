use std::io::{self, Write};
use std::sync::Mutex;

use isonline_common::report::{self, Reporter, ResultMap};
use tracing::error;

use crate::iprint;
use crate::terminal::spinner::Spinner;

/// Sends status lines through the log and JSON to stdout.
pub struct TerminalReporter<W: Write + Send = io::Stdout> {
    spinner: Option<Spinner>,
    out: Mutex<W>,
}

impl TerminalReporter {
    pub fn new(spinner: Option<Spinner>) -> Self {
        Self::with_output(spinner, io::stdout())
    }
}

impl<W: Write + Send> TerminalReporter<W> {
    pub fn with_output(spinner: Option<Spinner>, out: W) -> Self {
        Self {
            spinner,
            out: Mutex::new(out),
        }
    }

    /// Removes the spinner, if any, before anything else is written.
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.clear();
        }
    }

    fn write_line(&self, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            error!("failed to write results: {e}");
        }
    }
}

impl<W: Write + Send> Reporter for TerminalReporter<W> {
    fn log_status(&self, line: &str) {
        self.finish();
        iprint!(line);
    }

    fn print_json(&self, results: &ResultMap) {
        self.finish();
        match report::to_json(results) {
            Ok(json) => self.write_line(&json),
            Err(e) => error!("failed to encode results: {e}"),
        }
    }
}
