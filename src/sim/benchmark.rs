//! Parallel benchmarking of a solver over every candidate solution
//!
//! Runs are independent, so they fan out across a rayon pool; each worker
//! thread builds its own simulator so the partition caches are never
//! shared. Aggregation into a counting histogram is order independent,
//! which keeps results identical regardless of worker count.

use crate::core::{Dictionary, Word};
use crate::output::NullReporter;
use crate::sim::{SimError, SolverSpec};
use anyhow::Context;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default worker thread count for benchmark runs
pub const DEFAULT_WORKERS: usize = 8;

/// The result of one benchmark run, tagged with its solution
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Solved { solution: Word, turns: usize },
    Failed { solution: Word, error: SimError },
}

impl RunOutcome {
    /// The solution this run was played against
    #[must_use]
    pub fn solution(&self) -> &Word {
        match self {
            Self::Solved { solution, .. } | Self::Failed { solution, .. } => solution,
        }
    }
}

/// Aggregated results of benchmarking every candidate solution
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub total: usize,
    /// Turn count to number of solutions solved in that many turns
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<(Word, SimError)>,
    pub duration: Duration,
}

impl BenchmarkReport {
    fn from_outcomes(outcomes: Vec<RunOutcome>, duration: Duration) -> Self {
        let total = outcomes.len();
        let mut distribution = BTreeMap::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                RunOutcome::Solved { turns, .. } => {
                    *distribution.entry(turns).or_insert(0) += 1;
                }
                RunOutcome::Failed { solution, error } => failures.push((solution, error)),
            }
        }
        failures.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self {
            total,
            distribution,
            failures,
            duration,
        }
    }

    /// Number of solutions solved within the turn cap
    #[must_use]
    pub fn solved(&self) -> usize {
        self.distribution.values().sum()
    }

    /// Mean turns over the solved runs
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let turns: usize = self
            .distribution
            .iter()
            .map(|(&turns, &count)| turns * count)
            .sum();
        turns as f64 / solved as f64
    }
}

/// Plays every candidate solution against a solver configuration
pub struct Benchmarker {
    dictionary: Arc<Dictionary>,
    spec: SolverSpec,
    workers: usize,
}

impl Benchmarker {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, spec: SolverSpec, workers: usize) -> Self {
        Self {
            dictionary,
            spec,
            workers: workers.max(1),
        }
    }

    /// Benchmark with no progress notifications
    ///
    /// # Errors
    /// Fails only if the worker pool cannot be built.
    pub fn run(&self, first_guess: Option<&Word>) -> anyhow::Result<BenchmarkReport> {
        self.run_with(first_guess, |_| {})
    }

    /// Benchmark, invoking `notify` as each run completes
    ///
    /// Individual run failures are recorded in the report rather than
    /// aborting the remaining runs.
    ///
    /// # Errors
    /// Fails only if the worker pool cannot be built.
    pub fn run_with(
        &self,
        first_guess: Option<&Word>,
        notify: impl Fn(&RunOutcome) + Sync,
    ) -> anyhow::Result<BenchmarkReport> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .context("failed to build the benchmark worker pool")?;

        let solutions: Vec<Word> = self.dictionary.common_words().iter().cloned().collect();
        let started = Instant::now();

        let outcomes: Vec<RunOutcome> = pool.install(|| {
            solutions
                .par_iter()
                .map_init(
                    || {
                        self.spec
                            .simulator(Arc::clone(&self.dictionary), Box::new(NullReporter))
                    },
                    |simulator, solution| {
                        let outcome = match simulator.run(solution, first_guess) {
                            Ok(turns) => RunOutcome::Solved {
                                solution: solution.clone(),
                                turns,
                            },
                            Err(error) => RunOutcome::Failed {
                                solution: solution.clone(),
                                error,
                            },
                        };
                        notify(&outcome);
                        outcome
                    },
                )
                .collect()
        });

        Ok(BenchmarkReport::from_outcomes(outcomes, started.elapsed()))
    }
}
