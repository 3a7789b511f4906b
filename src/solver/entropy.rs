//! Information-maximizing solvers
//!
//! `EntropySolver` picks the vocabulary word with the highest Shannon
//! entropy over its feedback buckets; ties fall back to the same chain as
//! minimax so behavior stays predictable. `DeepEntropySolver` adds bounded
//! lookahead exactly like its minimax counterpart.

use super::{
    HistogramBuilder, Ranking, SeedTable, Solve, SolverError, select_best, select_best_deep,
    select_best_joint,
};
use crate::core::{Word, WordSeries};
use crate::solver::Guess;
use std::rc::Rc;

/// Shallow entropy maximizer
pub struct EntropySolver {
    histograms: Rc<HistogramBuilder>,
    seeds: SeedTable,
}

impl EntropySolver {
    #[must_use]
    pub fn new(histograms: Rc<HistogramBuilder>, seeds: SeedTable) -> Self {
        Self { histograms, seeds }
    }
}

impl Solve for EntropySolver {
    fn get_best_guess(
        &self,
        candidates: &WordSeries,
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best(&self.histograms, Ranking::Entropy, candidates, vocabulary)
    }

    fn get_best_joint_guess(
        &self,
        boards: &[&WordSeries],
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best_joint(&self.histograms, Ranking::Entropy, boards, vocabulary)
    }

    fn seed(&self, length: usize) -> Result<&Word, SolverError> {
        self.seeds.seed(length)
    }
}

/// Lookahead wrapper around an entropy-family solver
pub struct DeepEntropySolver {
    histograms: Rc<HistogramBuilder>,
    inner: Box<dyn Solve>,
}

impl DeepEntropySolver {
    #[must_use]
    pub fn new(histograms: Rc<HistogramBuilder>, inner: Box<dyn Solve>) -> Self {
        Self { histograms, inner }
    }
}

impl Solve for DeepEntropySolver {
    fn get_best_guess(
        &self,
        candidates: &WordSeries,
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best_deep(
            &self.histograms,
            self.inner.as_ref(),
            Ranking::Entropy,
            candidates,
            vocabulary,
        )
    }

    fn get_best_joint_guess(
        &self,
        boards: &[&WordSeries],
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError> {
        select_best_joint(&self.histograms, Ranking::Entropy, boards, vocabulary)
    }

    fn seed(&self, length: usize) -> Result<&Word, SolverError> {
        self.inner.seed(length)
    }
}
