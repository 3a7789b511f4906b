//! Benchmark command
//!
//! Plays every candidate solution through the solver on a worker pool and
//! prints the turn-count distribution.

use crate::core::{Dictionary, Word};
use crate::output::print_benchmark_report;
use crate::sim::{Benchmarker, RunOutcome, SolverSpec};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Run the benchmark with a progress bar and print the report
///
/// # Errors
/// Fails only if the worker pool cannot be built; individual unsolved
/// runs appear in the report instead.
pub fn run_benchmark(
    dictionary: Arc<Dictionary>,
    spec: &SolverSpec,
    workers: usize,
    first_guess: Option<&Word>,
) -> anyhow::Result<()> {
    let total = dictionary.common_words().len() as u64;
    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let benchmarker = Benchmarker::new(dictionary, spec.clone(), workers);
    let report = benchmarker.run_with(first_guess, |outcome: &RunOutcome| {
        progress.set_message(outcome.solution().text().to_string());
        progress.inc(1);
    })?;
    progress.finish_and_clear();

    print_benchmark_report(&report);
    Ok(())
}
