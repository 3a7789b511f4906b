//! Console rendering
//!
//! Colored per-turn output for interactive runs and the benchmark
//! distribution display.

use super::{RunReporter, TurnReport};
use crate::core::Word;
use crate::sim::BenchmarkReport;
use colored::Colorize;

/// Reporter that prints each turn to stdout
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Render a guess with one colored letter per feedback digit
    ///
    /// 2 = green (exact), 1 = yellow (present elsewhere), 0 = dimmed.
    #[must_use]
    pub fn paint_guess(guess: &str, score: &str) -> String {
        guess
            .chars()
            .zip(score.chars())
            .map(|(letter, digit)| {
                let letter = letter.to_ascii_uppercase().to_string();
                match digit {
                    '2' => letter.green().bold().to_string(),
                    '1' => letter.yellow().bold().to_string(),
                    _ => letter.dimmed().to_string(),
                }
            })
            .collect()
    }
}

impl RunReporter for ConsoleReporter {
    fn report_turn(&self, report: &TurnReport<'_>) {
        let painted = Self::paint_guess(report.guess.text(), report.score);

        let remaining = match report.remaining.len() {
            0 => "no candidates left".red().to_string(),
            1 => "1 candidate left".to_string(),
            n if n <= 6 => {
                let words: Vec<&str> = report.remaining.iter().map(Word::text).collect();
                format!("{n} candidates left: {}", words.join(", "))
            }
            n => format!("{n} candidates left"),
        };

        match report.solution {
            Some(solution) => println!(
                "  {painted}  {}  [{}]  {remaining}",
                report.score,
                solution.text().to_uppercase().dimmed()
            ),
            None => println!("  {painted}  {}  {remaining}", report.score),
        }
    }

    fn report_success(&self, turns: usize) {
        let noun = if turns == 1 { "turn" } else { "turns" };
        println!("{}", format!("Solved in {turns} {noun}").green().bold());
    }

    fn report_failure(&self, message: &str) {
        println!("{}", message.red().bold());
    }
}

/// Print a benchmark report as a turn-count distribution
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("  Solutions tested: {}", report.total);
    println!("  Solved:           {}", report.solved());
    if report.solved() > 0 {
        println!("  Average turns:    {:.3}", report.average_turns());
    }
    println!("  Elapsed:          {:.2?}", report.duration);

    let largest = report.distribution.values().copied().max().unwrap_or(0);
    if largest > 0 {
        println!("\n  Turn distribution:");
        for (&turns, &count) in &report.distribution {
            let width = (count * 40).div_ceil(largest);
            let bar = "█".repeat(width);
            println!("  {turns:>3} | {} {count}", bar.cyan());
        }
    }

    if !report.failures.is_empty() {
        println!(
            "\n  {}",
            format!("{} unsolved:", report.failures.len()).red().bold()
        );
        for (solution, error) in &report.failures {
            println!("    {} - {error}", solution.text().to_uppercase());
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_guess_covers_every_letter() {
        let painted = ConsoleReporter::paint_guess("crane", "02012");
        // Color codes aside, all five letters must appear uppercased
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(painted.contains(letter));
        }
    }
}
