//! Worst-case-minimizing solvers
//!
//! `MinimaxSolver` picks the vocabulary word whose largest feedback bucket
//! is smallest. `DeepMinimaxSolver` wraps an inner solver of the same family
//! and looks one additional move ahead per wrapper.

use super::{
    HistogramBuilder, Ranking, SeedTable, Solve, SolverError, select_best, select_best_deep,
    select_best_joint,
};
use crate::core::{Word, WordSeries};
use crate::solver::Guess;
use std::rc::Rc;

/// Shallow worst-case minimizer
pub struct MinimaxSolver {
    histograms: Rc<HistogramBuilder>,
    seeds: SeedTable,
}

impl MinimaxSolver {
    #[must_use]
    pub fn new(histograms: Rc<HistogramBuilder>, seeds: SeedTable) -> Self {
        Self { histograms, seeds }
    }
}

impl Solve for MinimaxSolver {
    fn get_best_guess(
        &self,
        candidates: &WordSeries,
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best(&self.histograms, Ranking::Minimax, candidates, vocabulary)
    }

    fn get_best_joint_guess(
        &self,
        boards: &[&WordSeries],
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best_joint(&self.histograms, Ranking::Minimax, boards, vocabulary)
    }

    fn seed(&self, length: usize) -> Result<&Word, SolverError> {
        self.seeds.seed(length)
    }
}

/// Lookahead wrapper around a minimax-family solver
///
/// Composition, not inheritance: chaining wrappers adds one level of
/// lookahead each.
pub struct DeepMinimaxSolver {
    histograms: Rc<HistogramBuilder>,
    inner: Box<dyn Solve>,
}

impl DeepMinimaxSolver {
    #[must_use]
    pub fn new(histograms: Rc<HistogramBuilder>, inner: Box<dyn Solve>) -> Self {
        Self { histograms, inner }
    }
}

impl Solve for DeepMinimaxSolver {
    fn get_best_guess(
        &self,
        candidates: &WordSeries,
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best_deep(
            &self.histograms,
            self.inner.as_ref(),
            Ranking::Minimax,
            candidates,
            vocabulary,
        )
    }

    fn get_best_joint_guess(
        &self,
        boards: &[&WordSeries],
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best_joint(&self.histograms, Ranking::Minimax, boards, vocabulary)
    }

    fn seed(&self, length: usize) -> Result<&Word, SolverError> {
        self.inner.seed(length)
    }
}
