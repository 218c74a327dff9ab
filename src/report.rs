//! Side channel for scan errors.
//!
//! The scanner never stops on malformed input. It hands each problem to a
//! [`Reporter`] and keeps going, so one pass surfaces every error.

use std::io::Write;

use tracing::warn;

use crate::lexer::ScanError;

/// Sink for errors found while scanning.
pub trait Reporter {
    /// Receive one error. `error.line` is 1-based and the message is
    /// `error.kind.to_string()`.
    fn report(&mut self, error: &ScanError);
}

impl Reporter for Vec<ScanError> {
    fn report(&mut self, error: &ScanError) {
        self.push(error.clone());
    }
}

impl<F> Reporter for F
where
    F: FnMut(&ScanError),
{
    fn report(&mut self, error: &ScanError) {
        self(error);
    }
}

/// Writes `[line N] Error: message` diagnostics and remembers whether
/// anything was reported.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    had_error: bool,
}

impl<W: Write> ConsoleReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            had_error: false,
        }
    }

    /// True once any error has been reported since the last reset.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clear the error flag, e.g. between prompt lines.
    pub const fn reset(&mut self) {
        self.had_error = false;
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, error: &ScanError) {
        warn!(line = error.line, "{}", error.kind);
        self.had_error = true;
        // Diagnostics are best effort; a closed stderr must not stop the scan.
        let _ = writeln!(self.out, "[line {}] Error: {}", error.line, error.kind);
    }
}
