//! Interactive solving assistant
//!
//! Suggests guesses for a game played elsewhere; the user types the
//! feedback observed after each guess as a base-3 digit string.

use crate::commands::read_input;
use crate::core::{Dictionary, Score, Scorer, Word};
use crate::output::{ConsoleReporter, RunReporter, TurnReport};
use crate::sim::SolverSpec;
use crate::solver::{HistogramBuilder, build_solver};
use anyhow::bail;
use colored::Colorize;
use std::rc::Rc;
use std::sync::Arc;

/// Drive the interactive assistant loop
///
/// # Errors
/// Fails on I/O errors, when feedback eliminates every candidate, or when
/// the turn cap passes without a perfect score.
pub fn run_solve(
    dictionary: Arc<Dictionary>,
    spec: &SolverSpec,
    first_guess: Option<&Word>,
) -> anyhow::Result<()> {
    let length = dictionary.word_length();
    if let Some(guess) = first_guess {
        if guess.len() != length {
            bail!(
                "opening guess '{guess}' has {} letters, expected {length}",
                guess.len()
            );
        }
    }
    let scorer = Scorer::new(length);
    let perfect = scorer.perfect_score();
    let histograms = Rc::new(HistogramBuilder::new(scorer));
    let solver = build_solver(spec.kind, spec.depth, spec.seeds.clone(), &histograms);
    let reporter = ConsoleReporter;

    let (all_words, common_words) = dictionary.words();
    let mut available = common_words.clone();
    let mut guess = match first_guess {
        Some(word) => word.clone(),
        None => solver.seed(length)?.clone(),
    };

    println!(
        "Enter feedback as {length} digits, one per letter: 2 exact, 1 present elsewhere, 0 absent."
    );
    println!("Type 'quit' to stop.\n");

    for turn in 1..=spec.turn_cap {
        println!(
            "Turn {turn}: try {} ({} candidates)",
            guess.text().to_uppercase().bold(),
            available.len()
        );

        let observed = loop {
            let input = read_input("Feedback")?;
            if input == "quit" {
                return Ok(());
            }
            match Score::from_ternary(&input, length) {
                Some(score) => break score,
                None => println!("  Expected {length} digits of 0, 1, or 2."),
            }
        };

        if observed == perfect {
            reporter.report_success(turn);
            return Ok(());
        }

        let partition = histograms.get_solutions_by_score(&available, &guess);
        available = match partition.get(&observed) {
            Some(bucket) => bucket.clone(),
            None => bail!(
                "no candidate matches that feedback; check the digits for '{}'",
                guess
            ),
        };

        reporter.report_turn(&TurnReport {
            solution: None,
            guess: &guess,
            score: &observed.to_ternary(length),
            remaining: &available,
        });

        guess = solver.get_best_guess(&available, all_words)?.word;
    }

    bail!("ran out of turns after {}", spec.turn_cap)
}
