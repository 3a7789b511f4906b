//! Adversarial evasion mode
//!
//! Plays the other side of the game: the solution is never fixed up front.
//! After each guess the candidate set is re-partitioned and the feedback
//! that keeps the most candidates alive is reported, so the user is always
//! chasing the largest surviving bucket. The perfect score is conceded
//! only when no other bucket remains.

use crate::commands::read_input;
use crate::core::{Dictionary, Score, Scorer, Word, WordSeries};
use crate::output::{ConsoleReporter, RunReporter, TurnReport};
use crate::sim::SolverSpec;
use crate::solver::HistogramBuilder;
use anyhow::bail;
use colored::Colorize;
use std::rc::Rc;
use std::sync::Arc;

/// Pick the feedback that keeps the most candidates in play
///
/// The perfect-score bucket ranks below every other bucket; score value
/// breaks ties so the choice is deterministic.
fn most_evasive(
    partition: &rustc_hash::FxHashMap<Score, WordSeries>,
    perfect: Score,
) -> Option<(Score, WordSeries)> {
    partition
        .iter()
        .max_by_key(|(score, bucket)| {
            let rank = if **score == perfect { 0 } else { bucket.len() };
            (rank, std::cmp::Reverse(score.value()))
        })
        .map(|(score, bucket)| (*score, bucket.clone()))
}

/// Run the evasion loop against guesses typed by the user
///
/// A pre-supplied `first_guess` is played on turn one without prompting.
///
/// # Errors
/// Fails on I/O errors or when the candidate set is exhausted by invalid
/// state, which cannot happen through normal play.
pub fn run_evade(
    dictionary: Arc<Dictionary>,
    spec: &SolverSpec,
    first_guess: Option<&Word>,
) -> anyhow::Result<()> {
    let length = dictionary.word_length();
    let scorer = Scorer::new(length);
    let perfect = scorer.perfect_score();
    let histograms = Rc::new(HistogramBuilder::new(scorer));
    let reporter = ConsoleReporter;

    let (all_words, common_words) = dictionary.words();
    let mut available = common_words.clone();

    println!("Guess the word I am thinking of. I will dodge for as long as I can.");
    println!("Type 'quit' to give up.\n");

    if let Some(word) = first_guess {
        if word.len() != length {
            bail!("opening guess '{word}' has the wrong length");
        }
    }

    for turn in 1..=spec.turn_cap {
        let preset = (turn == 1).then_some(first_guess).flatten();
        let guess = match preset {
            Some(word) => {
                println!("Turn {turn}, your guess: {word}");
                word.clone()
            }
            None => loop {
                let input = read_input(&format!("Turn {turn}, your guess"))?;
                if input == "quit" {
                    if let Some(word) = available.iter().next() {
                        println!("I was thinking of {}", word.text().to_uppercase().bold());
                    }
                    return Ok(());
                }
                match Word::new(input.as_str()) {
                    Ok(word) if word.len() != length => {
                        println!("  Guesses must be {length} letters.");
                    }
                    Ok(word) if !all_words.contains(&word) => {
                        println!("  '{word}' is not in the word list.");
                    }
                    Ok(word) => break word,
                    Err(error) => println!("  {error}"),
                }
            },
        };

        let partition = histograms.get_solutions_by_score(&available, &guess);
        let Some((score, bucket)) = most_evasive(&partition, perfect) else {
            bail!("candidate set is empty");
        };

        if score == perfect {
            println!(
                "{} You cornered me on turn {turn}.",
                "Caught!".green().bold()
            );
            return Ok(());
        }

        available = bucket;
        reporter.report_turn(&TurnReport {
            solution: None,
            guess: &guess,
            score: &score.to_ternary(length),
            remaining: &available,
        });
    }

    if let Some(word) = available.iter().next() {
        println!(
            "Out of turns. I was thinking of {}",
            word.text().to_uppercase().bold()
        );
    }
    Ok(())
}
