//! Progress reporting
//!
//! The solving loop pushes per-turn updates through the `RunReporter`
//! trait; console rendering lives in `display`. Batch runs use the
//! `NullReporter` so workers stay silent.

pub mod display;

pub use display::{ConsoleReporter, print_benchmark_report};

use crate::core::{Word, WordSeries};

/// One turn's worth of progress for a reporter
pub struct TurnReport<'a> {
    /// The hidden solution, when the caller knows it
    pub solution: Option<&'a Word>,
    pub guess: &'a Word,
    /// Feedback as a zero-padded base-3 digit string, most-significant first
    pub score: &'a str,
    /// Candidates still consistent after this turn
    pub remaining: &'a WordSeries,
}

/// Consumer of solving-loop progress
pub trait RunReporter {
    fn report_turn(&self, report: &TurnReport<'_>);
    fn report_success(&self, turns: usize);
    fn report_failure(&self, message: &str);
}

/// Reporter that swallows everything; used by benchmark workers
pub struct NullReporter;

impl RunReporter for NullReporter {
    fn report_turn(&self, _report: &TurnReport<'_>) {}
    fn report_success(&self, _turns: usize) {}
    fn report_failure(&self, _message: &str) {}
}
