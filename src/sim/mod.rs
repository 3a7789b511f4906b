//! Simulation and benchmarking over known solutions

mod benchmark;
mod simulator;

pub use benchmark::{BenchmarkReport, Benchmarker, RunOutcome, DEFAULT_WORKERS};
pub use simulator::{SimError, Simulator, DEFAULT_TURN_CAP};

use crate::core::{Dictionary, Scorer};
use crate::output::RunReporter;
use crate::solver::{build_solver, HistogramBuilder, SeedTable, SolverKind};
use std::rc::Rc;
use std::sync::Arc;

/// Everything needed to reconstruct a solver, cheap to clone across workers
#[derive(Debug, Clone)]
pub struct SolverSpec {
    pub kind: SolverKind,
    pub depth: usize,
    pub seeds: SeedTable,
    pub turn_cap: usize,
}

impl Default for SolverSpec {
    fn default() -> Self {
        Self {
            kind: SolverKind::Minimax,
            depth: 1,
            seeds: SeedTable::standard(),
            turn_cap: DEFAULT_TURN_CAP,
        }
    }
}

/// Wire up a scorer, a partition cache, and a solver into a ready simulator
///
/// Each call builds a fresh partition cache, so simulators created for
/// separate worker threads never share mutable state.
#[must_use]
pub fn create_simulator(
    dictionary: Arc<Dictionary>,
    kind: SolverKind,
    depth: usize,
    seeds: SeedTable,
    turn_cap: usize,
    reporter: Box<dyn RunReporter>,
) -> Simulator {
    let scorer = Scorer::new(dictionary.word_length());
    let histograms = Rc::new(HistogramBuilder::new(scorer));
    let solver = build_solver(kind, depth, seeds, &histograms);
    Simulator::new(dictionary, histograms, solver, reporter, turn_cap)
}

impl SolverSpec {
    /// Convenience wrapper over [`create_simulator`]
    #[must_use]
    pub fn simulator(
        &self,
        dictionary: Arc<Dictionary>,
        reporter: Box<dyn RunReporter>,
    ) -> Simulator {
        create_simulator(
            dictionary,
            self.kind,
            self.depth,
            self.seeds.clone(),
            self.turn_cap,
            reporter,
        )
    }
}
