//! Guess-selection algorithms
//!
//! The solver family shares one capability trait: given the remaining
//! candidate set and the permitted guess vocabulary, produce the best next
//! guess. Minimax solvers minimize the worst-case bucket; entropy solvers
//! maximize expected information. Deep variants wrap an inner solver of the
//! same family to look one extra move ahead per wrapper.

mod entropy;
pub mod guess;
mod histogram;
mod minimax;

pub use entropy::{DeepEntropySolver, EntropySolver};
pub use guess::Guess;
pub use histogram::{HistogramBuilder, ScorePartition};
pub use minimax::{DeepMinimaxSolver, MinimaxSolver};

use crate::core::{Word, WordSeries};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Fan-out bound for deep solvers: how many shallow-best guesses are
/// explored, and how many worst-case buckets per guess
pub const N_BRANCH: usize = 5;

/// Error type for solver configuration and selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    UnsupportedWordLength(usize),
    InvalidSolverConfiguration(String),
    NoCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedWordLength(length) => {
                write!(f, "No seed guess configured for word length {length}")
            }
            Self::InvalidSolverConfiguration(name) => {
                write!(f, "Unrecognized solver type '{name}' (expected 'minimax' or 'entropy')")
            }
            Self::NoCandidates => write!(f, "No candidates left to evaluate"),
        }
    }
}

impl std::error::Error for SolverError {}

/// The solver family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Minimax,
    Entropy,
}

impl FromStr for SolverKind {
    type Err = SolverError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Self::Minimax),
            "entropy" => Ok(Self::Entropy),
            other => Err(SolverError::InvalidSolverConfiguration(other.to_string())),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimax => write!(f, "minimax"),
            Self::Entropy => write!(f, "entropy"),
        }
    }
}

/// Precomputed opening guesses, keyed by word length
///
/// Seeds are constants chosen offline; lookups for an unconfigured length
/// fail fast rather than falling back to a recomputation.
#[derive(Debug, Clone)]
pub struct SeedTable {
    seeds: FxHashMap<usize, Word>,
}

impl SeedTable {
    /// The standard seed set for word lengths 4 through 9
    #[must_use]
    pub fn standard() -> Self {
        let mut seeds = FxHashMap::default();
        for text in ["olea", "raise", "tailer", "tenails", "centrals", "secretion"] {
            let word = Word::new(text).expect("seed literals are valid words");
            seeds.insert(word.len(), word);
        }
        Self { seeds }
    }

    /// Replace or add the seed for one word length
    pub fn set(&mut self, word: Word) {
        self.seeds.insert(word.len(), word);
    }

    /// Look up the seed guess for a word length
    ///
    /// # Errors
    /// Returns `SolverError::UnsupportedWordLength` for lengths without an
    /// entry.
    pub fn seed(&self, length: usize) -> Result<&Word, SolverError> {
        self.seeds
            .get(&length)
            .ok_or(SolverError::UnsupportedWordLength(length))
    }
}

impl Default for SeedTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Capability interface of the solver family
pub trait Solve {
    /// Choose the best next guess for one candidate set
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if the candidate set or the
    /// vocabulary is empty.
    fn get_best_guess(
        &self,
        candidates: &WordSeries,
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError>;

    /// Choose one guess that jointly discriminates several candidate sets
    ///
    /// Used by multi-board play: the bucket-size distributions of all active
    /// boards are pooled before ranking.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if no board has candidates or the
    /// vocabulary is empty.
    fn get_best_joint_guess(
        &self,
        boards: &[&WordSeries],
        vocabulary: &WordSeries,
    ) -> Result<Guess, SolverError>;

    /// The precomputed opening guess for a word length
    ///
    /// # Errors
    /// Returns `SolverError::UnsupportedWordLength` for unconfigured
    /// lengths.
    fn seed(&self, length: usize) -> Result<&Word, SolverError>;
}

/// Which of the two family orderings a solver ranks guesses by
#[derive(Debug, Clone, Copy)]
pub(crate) enum Ranking {
    Minimax,
    Entropy,
}

impl Ranking {
    pub(crate) fn compare(
        self,
        a: &Guess,
        b: &Guess,
        common_words: &WordSeries,
    ) -> Ordering {
        match self {
            Self::Minimax => a.minimax_cmp(b, common_words),
            Self::Entropy => a.entropy_cmp(b, common_words),
        }
    }
}

/// Evaluate every vocabulary word against the candidate set
pub(crate) fn evaluate_all<'a>(
    histograms: &'a HistogramBuilder,
    candidates: &'a WordSeries,
    vocabulary: &'a WordSeries,
) -> impl Iterator<Item = Guess> + 'a {
    vocabulary.iter().map(move |word| {
        let histogram = histograms.get_histogram(candidates, word);
        Guess::create(word.clone(), &histogram)
    })
}

/// Shallow selection shared by both solver families
pub(crate) fn select_best(
    histograms: &HistogramBuilder,
    ranking: Ranking,
    candidates: &WordSeries,
    vocabulary: &WordSeries,
) -> Result<Guess, SolverError> {
    if candidates.is_empty() || vocabulary.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    evaluate_all(histograms, candidates, vocabulary)
        .min_by(|a, b| ranking.compare(a, b, candidates))
        .ok_or(SolverError::NoCandidates)
}

/// Joint selection across several boards sharing one guess stream
pub(crate) fn select_best_joint(
    histograms: &HistogramBuilder,
    ranking: Ranking,
    boards: &[&WordSeries],
    vocabulary: &WordSeries,
) -> Result<Guess, SolverError> {
    let common_words = WordSeries::union(boards);
    if common_words.is_empty() || vocabulary.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    vocabulary
        .iter()
        .map(|word| {
            let sizes = boards.iter().flat_map(|board| {
                histograms.get_histogram(board, word).into_values()
            });
            Guess::from_bucket_sizes(word.clone(), sizes)
        })
        .min_by(|a, b| ranking.compare(a, b, &common_words))
        .ok_or(SolverError::NoCandidates)
}

/// Bounded-depth lookahead shared by both deep solvers
///
/// Branch-and-bound approximation: explore the `N_BRANCH` shallow-best
/// guesses; for each, recurse into its `N_BRANCH` largest outcome buckets
/// via the inner solver; commit to the guess whose worst nested best guess
/// ranks best.
pub(crate) fn select_best_deep(
    histograms: &HistogramBuilder,
    inner: &dyn Solve,
    ranking: Ranking,
    candidates: &WordSeries,
    vocabulary: &WordSeries,
) -> Result<Guess, SolverError> {
    if candidates.is_empty() || vocabulary.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    let mut shallow: Vec<Guess> = evaluate_all(histograms, candidates, vocabulary).collect();
    shallow.sort_by(|a, b| ranking.compare(a, b, candidates));
    shallow.truncate(N_BRANCH);

    let mut best: Option<(Guess, Guess)> = None;

    for outer in shallow {
        let partition = histograms.get_solutions_by_score(candidates, &outer.word);

        // Largest buckets first; ties resolved by bucket content so the
        // exploration order is deterministic
        let mut buckets: Vec<&WordSeries> = partition.values().collect();
        buckets.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.words().cmp(b.words()))
        });
        buckets.truncate(N_BRANCH);

        let mut worst: Option<Guess> = None;
        for bucket in buckets {
            let nested = inner.get_best_guess(bucket, vocabulary)?;
            worst = Some(match worst {
                Some(current) if ranking.compare(&nested, &current, candidates).is_gt() => nested,
                Some(current) => current,
                None => nested,
            });
        }

        let Some(worst) = worst else {
            continue;
        };

        best = Some(match best {
            Some((best_outer, best_worst))
                if ranking.compare(&worst, &best_worst, candidates).is_lt() =>
            {
                (outer, worst)
            }
            Some(kept) => kept,
            None => (outer, worst),
        });
    }

    best.map(|(outer, _)| outer).ok_or(SolverError::NoCandidates)
}

/// Build a solver chain of the requested family and lookahead depth
///
/// Depth 1 is the shallow solver; each additional level wraps the chain in
/// a deep variant of the same family.
#[must_use]
pub fn build_solver(
    kind: SolverKind,
    depth: usize,
    seeds: SeedTable,
    histograms: &Rc<HistogramBuilder>,
) -> Box<dyn Solve> {
    let depth = depth.max(1);
    match kind {
        SolverKind::Minimax => {
            let mut solver: Box<dyn Solve> =
                Box::new(MinimaxSolver::new(Rc::clone(histograms), seeds));
            for _ in 1..depth {
                solver = Box::new(DeepMinimaxSolver::new(Rc::clone(histograms), solver));
            }
            solver
        }
        SolverKind::Entropy => {
            let mut solver: Box<dyn Solve> =
                Box::new(EntropySolver::new(Rc::clone(histograms), seeds));
            for _ in 1..depth {
                solver = Box::new(DeepEntropySolver::new(Rc::clone(histograms), solver));
            }
            solver
        }
    }
}
