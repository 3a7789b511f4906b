//! Simulate command
//!
//! Plays one or more known solutions against the solver and prints the
//! turn-by-turn transcript. More than one solution switches to the shared
//! guess stream variant, where every board is narrowed by the same guess.

use crate::core::{Dictionary, Word};
use crate::output::ConsoleReporter;
use crate::sim::SolverSpec;
use anyhow::{bail, Context};
use std::sync::Arc;

/// Run the simulation and print the transcript
///
/// # Errors
/// Fails when a solution has the wrong length, or when the run does not
/// converge within the turn cap.
pub fn run_simulate(
    dictionary: Arc<Dictionary>,
    spec: &SolverSpec,
    solutions: &[Word],
    first_guess: Option<&Word>,
) -> anyhow::Result<()> {
    if solutions.is_empty() {
        bail!("at least one solution is required");
    }
    for solution in solutions {
        if solution.len() != dictionary.word_length() {
            bail!(
                "solution '{solution}' has {} letters, expected {}",
                solution.len(),
                dictionary.word_length()
            );
        }
    }
    if let Some(guess) = first_guess {
        if guess.len() != dictionary.word_length() {
            bail!(
                "opening guess '{guess}' has {} letters, expected {}",
                guess.len(),
                dictionary.word_length()
            );
        }
    }

    let simulator = spec.simulator(dictionary, Box::new(ConsoleReporter));

    if solutions.len() == 1 {
        simulator
            .run(&solutions[0], first_guess)
            .with_context(|| format!("run against '{}' failed", solutions[0]))?;
    } else {
        simulator
            .run_multi(solutions, first_guess)
            .context("multi-board run failed")?;
    }
    Ok(())
}
