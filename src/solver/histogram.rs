//! Caching layer over the scorer's partition queries
//!
//! Guess selection and candidate narrowing both ask for the partition of one
//! candidate set by one guess, often repeatedly within a turn. The builder
//! memoizes those partitions keyed by (series identity, guess word). Series
//! identities are allocation-unique, so a cache hit is always byte-identical
//! to a recomputation; a stale entry for a changed candidate set cannot
//! exist. The cache is unbounded within a session: candidate sets only
//! shrink, so growth is bounded by session length times vocabulary size.

use crate::core::{Score, Scorer, Word, WordSeries};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Partition of a candidate set by feedback score
pub type ScorePartition = FxHashMap<Score, WordSeries>;

/// Memoizing wrapper around a [`Scorer`]
///
/// Single-threaded by design; each benchmark worker owns its own instance.
pub struct HistogramBuilder {
    scorer: Scorer,
    cache: RefCell<FxHashMap<(u64, Word), Rc<ScorePartition>>>,
}

impl HistogramBuilder {
    #[must_use]
    pub fn new(scorer: Scorer) -> Self {
        Self {
            scorer,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// The wrapped scorer
    #[inline]
    #[must_use]
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Partition `candidates` by the feedback each would produce for `guess`
    ///
    /// Memoized per (candidate-set identity, guess).
    #[must_use]
    pub fn get_solutions_by_score(
        &self,
        candidates: &WordSeries,
        guess: &Word,
    ) -> Rc<ScorePartition> {
        let key = (candidates.id(), guess.clone());

        if let Some(hit) = self.cache.borrow().get(&key) {
            return Rc::clone(hit);
        }

        let partition = Rc::new(self.scorer.get_solutions_by_score(candidates, guess));
        self.cache
            .borrow_mut()
            .insert(key, Rc::clone(&partition));
        partition
    }

    /// Bucket sizes only; computed directly, no subsets materialized
    #[must_use]
    pub fn get_histogram(&self, candidates: &WordSeries, guess: &Word) -> FxHashMap<Score, usize> {
        self.scorer.get_histogram(candidates, guess)
    }

    /// Number of memoized partitions
    #[must_use]
    pub fn cached_partitions(&self) -> usize {
        self.cache.borrow().len()
    }
}
