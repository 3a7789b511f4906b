//! The guess/feedback/narrow loop
//!
//! A `Simulator` drives a solver to convergence against one known solution,
//! or against several solutions sharing a single guess stream (the
//! multi-board variant). The loop is inherently sequential: each turn's
//! candidate set depends on the previous turn's feedback.

use crate::core::{Dictionary, Word};
use crate::output::{RunReporter, TurnReport};
use crate::solver::{HistogramBuilder, Solve, SolverError};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Turns allowed before a run is declared exhausted
pub const DEFAULT_TURN_CAP: usize = 15;

/// Error type for solve runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The turn cap was reached without the perfect score
    ConvergenceFailure { turn_cap: usize },
    /// Feedback narrowed the candidate set to empty; the solution is not in
    /// the candidate vocabulary
    NoRemainingCandidates { guess: Word },
    /// A solution or opening guess does not match the session word length
    LengthMismatch { word: Word, expected: usize },
    Solver(SolverError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergenceFailure { turn_cap } => {
                write!(f, "Failed to converge after {turn_cap} turns")
            }
            Self::NoRemainingCandidates { guess } => {
                write!(f, "No candidates remain after guess '{guess}'")
            }
            Self::LengthMismatch { word, expected } => {
                write!(
                    f,
                    "Word '{word}' has {} letters, expected {expected}",
                    word.len()
                )
            }
            Self::Solver(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<SolverError> for SimError {
    fn from(error: SolverError) -> Self {
        Self::Solver(error)
    }
}

/// Runs the solving state machine to convergence
///
/// States are Guessing, Converged (success, within the cap), and Exhausted
/// (cap reached); the two terminal states map to `Ok`/`Err`.
pub struct Simulator {
    dictionary: Arc<Dictionary>,
    histograms: Rc<HistogramBuilder>,
    solver: Box<dyn Solve>,
    reporter: Box<dyn RunReporter>,
    turn_cap: usize,
}

impl Simulator {
    #[must_use]
    pub fn new(
        dictionary: Arc<Dictionary>,
        histograms: Rc<HistogramBuilder>,
        solver: Box<dyn Solve>,
        reporter: Box<dyn RunReporter>,
        turn_cap: usize,
    ) -> Self {
        Self {
            dictionary,
            histograms,
            solver,
            reporter,
            turn_cap,
        }
    }

    /// The session dictionary
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn check_length(&self, word: &Word) -> Result<(), SimError> {
        if word.len() == self.dictionary.word_length() {
            Ok(())
        } else {
            Err(SimError::LengthMismatch {
                word: word.clone(),
                expected: self.dictionary.word_length(),
            })
        }
    }

    fn opening_guess(&self, first_guess: Option<&Word>) -> Result<Word, SimError> {
        match first_guess {
            Some(guess) => {
                self.check_length(guess)?;
                Ok(guess.clone())
            }
            None => Ok(self.solver.seed(self.dictionary.word_length())?.clone()),
        }
    }

    /// Solve one hidden solution; returns the number of turns taken
    ///
    /// # Errors
    /// `LengthMismatch` if the solution or opening guess has the wrong
    /// length, `ConvergenceFailure` past the turn cap,
    /// `NoRemainingCandidates` if the observed feedback eliminates every
    /// candidate.
    pub fn run(&self, solution: &Word, first_guess: Option<&Word>) -> Result<usize, SimError> {
        let (all_words, common_words) = self.dictionary.words();
        let scorer = self.histograms.scorer();
        let length = self.dictionary.word_length();

        self.check_length(solution)?;
        let mut guess = self.opening_guess(first_guess)?;
        let mut available = common_words.clone();

        for turn in 1..=self.turn_cap {
            let observed = scorer.score_word(solution, &guess);
            let partition = self.histograms.get_solutions_by_score(&available, &guess);
            available = partition
                .get(&observed)
                .cloned()
                .ok_or(SimError::NoRemainingCandidates {
                    guess: guess.clone(),
                })?;

            self.reporter.report_turn(&TurnReport {
                solution: Some(solution),
                guess: &guess,
                score: &observed.to_ternary(length),
                remaining: &available,
            });

            if scorer.is_perfect_score(observed) {
                self.reporter.report_success(turn);
                return Ok(turn);
            }

            guess = self.solver.get_best_guess(&available, all_words)?.word;
        }

        let error = SimError::ConvergenceFailure {
            turn_cap: self.turn_cap,
        };
        self.reporter.report_failure(&error.to_string());
        Err(error)
    }

    /// Solve several hidden solutions with one shared guess stream
    ///
    /// Each turn every still-active board is scored against the shared
    /// guess and narrowed independently; solved boards leave play and are
    /// never scored again. The next guess is chosen to jointly discriminate
    /// all remaining boards. Returns the turn on which the last board was
    /// solved.
    ///
    /// # Errors
    /// As for [`run`](Self::run), applied across all boards.
    pub fn run_multi(
        &self,
        solutions: &[Word],
        first_guess: Option<&Word>,
    ) -> Result<usize, SimError> {
        let (all_words, common_words) = self.dictionary.words();
        let scorer = self.histograms.scorer();
        let length = self.dictionary.word_length();

        for solution in solutions {
            self.check_length(solution)?;
        }
        let mut guess = self.opening_guess(first_guess)?;
        let mut boards: Vec<(Word, _)> = solutions
            .iter()
            .map(|solution| (solution.clone(), common_words.clone()))
            .collect();

        if boards.is_empty() {
            return Ok(0);
        }

        for turn in 1..=self.turn_cap {
            for (solution, available) in &mut boards {
                let observed = scorer.score_word(solution, &guess);
                let partition = self.histograms.get_solutions_by_score(available, &guess);
                *available = partition.get(&observed).cloned().ok_or(
                    SimError::NoRemainingCandidates {
                        guess: guess.clone(),
                    },
                )?;

                self.reporter.report_turn(&TurnReport {
                    solution: Some(solution),
                    guess: &guess,
                    score: &observed.to_ternary(length),
                    remaining: available,
                });
            }

            boards.retain(|(solution, _)| *solution != guess);
            if boards.is_empty() {
                self.reporter.report_success(turn);
                return Ok(turn);
            }

            let active: Vec<_> = boards.iter().map(|(_, available)| available).collect();
            guess = self.solver.get_best_joint_guess(&active, all_words)?.word;
        }

        let error = SimError::ConvergenceFailure {
            turn_cap: self.turn_cap,
        };
        self.reporter.report_failure(&error.to_string());
        Err(error)
    }
}
