//! Guesswork CLI
//!
//! Solver, simulator, and benchmarker for fixed-length word-guessing
//! deduction games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guesswork::{
    commands::{run_benchmark, run_evade, run_simulate, run_solve},
    core::Word,
    sim::{DEFAULT_TURN_CAP, DEFAULT_WORKERS, SolverSpec},
    solver::{SeedTable, SolverKind},
    wordlists::loader::load_dictionary,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "guesswork",
    about = "Minimax and entropy solver for word-guessing deduction games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Guess ranking: minimax or entropy
    #[arg(short = 's', long, global = true, default_value = "minimax")]
    solver: String,

    /// Lookahead depth; values above 1 search nested partitions
    #[arg(short, long, global = true, default_value_t = 1)]
    depth: usize,

    /// Turns allowed before a run is declared exhausted
    #[arg(long, global = true, default_value_t = DEFAULT_TURN_CAP)]
    turn_cap: usize,

    /// Word length; lengths other than 5 need --words/--answers files
    #[arg(long, global = true, default_value_t = 5)]
    size: usize,

    /// File of permitted guess words, one per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// File of candidate-solution words, one per line
    #[arg(short = 'a', long, global = true)]
    answers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play known solutions against the solver and print the transcript
    Simulate {
        /// Hidden solution; repeat for a multi-board game
        #[arg(long = "solution", required = true)]
        solutions: Vec<String>,

        /// Override the opening guess
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Interactive assistant: suggests guesses, you type the feedback
    Solve {
        /// Override the opening guess
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Adversarial mode: you guess, the candidate set dodges
    Evade {
        /// Pre-supplied opening guess
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Play every candidate solution and print the turn distribution
    Benchmark {
        /// Override the opening guess
        #[arg(short, long)]
        guess: Option<String>,

        /// Worker threads
        #[arg(long, default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text.trim().to_lowercase()).with_context(|| format!("invalid word '{text}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let kind: SolverKind = cli.solver.parse()?;
    let spec = SolverSpec {
        kind,
        depth: cli.depth,
        seeds: SeedTable::standard(),
        turn_cap: cli.turn_cap,
    };

    match cli.command {
        Commands::Simulate { solutions, guess } => {
            let solutions: Vec<Word> = solutions
                .iter()
                .map(|text| parse_word(text))
                .collect::<Result<_>>()?;
            let first_guess = guess.as_deref().map(parse_word).transpose()?;

            // Solutions outside the stock lists are still playable
            let dictionary = Arc::new(load_dictionary(
                cli.size,
                &solutions,
                cli.words.as_deref(),
                cli.answers.as_deref(),
            )?);
            run_simulate(dictionary, &spec, &solutions, first_guess.as_ref())
        }
        Commands::Solve { guess } => {
            let first_guess = guess.as_deref().map(parse_word).transpose()?;
            let dictionary = Arc::new(load_dictionary(
                cli.size,
                &[],
                cli.words.as_deref(),
                cli.answers.as_deref(),
            )?);
            run_solve(dictionary, &spec, first_guess.as_ref())
        }
        Commands::Evade { guess } => {
            let first_guess = guess.as_deref().map(parse_word).transpose()?;
            let dictionary = Arc::new(load_dictionary(
                cli.size,
                &[],
                cli.words.as_deref(),
                cli.answers.as_deref(),
            )?);
            run_evade(dictionary, &spec, first_guess.as_ref())
        }
        Commands::Benchmark { guess, workers } => {
            let first_guess = guess.as_deref().map(parse_word).transpose()?;
            let dictionary = Arc::new(load_dictionary(
                cli.size,
                &[],
                cli.words.as_deref(),
                cli.answers.as_deref(),
            )?);
            run_benchmark(dictionary, &spec, workers, first_guess.as_ref())
        }
    }
}
