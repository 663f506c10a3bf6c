//! Diagnostic emission: `tc_error` from the spec, plus the sink it reports
//! through.
//!
//! The sink is an injectable trait object rather than a hardcoded
//! `eprintln!`, per the design notes — tests capture diagnostics in memory
//! instead of scraping process stderr.

use crate::token::Token;
use std::fmt;

/// A single recorded type error: location plus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type Error at {}: {}", self.token, self.message)
    }
}

/// Where diagnostics go. `check_program`'s default wiring uses
/// [`StderrSink`]; tests use [`CollectingSink`] to assert on exact messages.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);

    /// Messages recorded so far, in emission order. `StderrSink` has
    /// nothing to report back (it already wrote to stderr); sinks that
    /// buffer, like [`CollectingSink`], override this for tests.
    fn messages(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Writes each diagnostic to the process's standard error, matching the
/// spec's default behavior.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

/// Captures diagnostics in memory, in emission order, for tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

/// Truncates a diagnostic message to at most `max_len` bytes, on a char
/// boundary, mirroring the C implementation's 255-byte `snprintf` cap.
pub fn truncate_message(msg: String, max_len: usize) -> String {
    if msg.len() <= max_len {
        return msg;
    }
    let mut end = max_len;
    while end > 0 && !msg.is_char_boundary(end) {
        end -= 1;
    }
    msg[..end].to_string()
}
