//! Guess evaluation records
//!
//! A `Guess` captures one word's discriminating power against a specific
//! candidate set: the size of the largest feedback bucket, the number of
//! distinct buckets, and the Shannon entropy of the bucket-size
//! distribution. Records are created per evaluation and never outlive the
//! candidate set they were computed against.

use crate::core::{Score, Word, WordSeries};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Statistics for one candidate guess against a fixed candidate set
#[derive(Debug, Clone)]
pub struct Guess {
    pub word: Word,
    pub size_of_largest_bucket: usize,
    pub number_of_buckets: usize,
    pub entropy: f64,
}

impl Guess {
    /// Build a guess record from a feedback histogram
    ///
    /// The histogram must be non-empty; callers guarantee at least one
    /// candidate.
    #[must_use]
    pub fn create(word: Word, histogram: &FxHashMap<Score, usize>) -> Self {
        Self::from_bucket_sizes(word, histogram.values().copied())
    }

    /// Build a guess record from raw bucket sizes
    ///
    /// Used directly for multi-board selection, where the buckets of several
    /// candidate sets are pooled.
    #[must_use]
    pub fn from_bucket_sizes(word: Word, sizes: impl IntoIterator<Item = usize>) -> Self {
        let sizes: Vec<usize> = sizes.into_iter().collect();
        debug_assert!(!sizes.is_empty(), "histogram must not be empty");

        let total: usize = sizes.iter().sum();
        let size_of_largest_bucket = sizes.iter().copied().max().unwrap_or(0);
        let number_of_buckets = sizes.len();

        let entropy = sizes
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / total as f64;
                -p * p.log2()
            })
            .sum();

        Self {
            word,
            size_of_largest_bucket,
            number_of_buckets,
            entropy,
        }
    }

    /// True if this guess beats `other` under the minimax ordering
    #[must_use]
    pub fn improves_upon(&self, other: &Self, common_words: &WordSeries) -> bool {
        self.minimax_cmp(other, common_words) == Ordering::Less
    }

    /// Strict total minimax order: smaller largest bucket, then membership
    /// in `common_words`, then more buckets, then lexicographically smaller
    /// word
    #[must_use]
    pub fn minimax_cmp(&self, other: &Self, common_words: &WordSeries) -> Ordering {
        self.size_of_largest_bucket
            .cmp(&other.size_of_largest_bucket)
            .then_with(|| self.tie_break(other, common_words))
    }

    /// Strict total entropy order: larger entropy first, then the same
    /// tie-break chain as minimax
    #[must_use]
    pub fn entropy_cmp(&self, other: &Self, common_words: &WordSeries) -> Ordering {
        other
            .entropy
            .total_cmp(&self.entropy)
            .then_with(|| self.tie_break(other, common_words))
    }

    fn tie_break(&self, other: &Self, common_words: &WordSeries) -> Ordering {
        let membership = match (
            common_words.contains(&self.word),
            common_words.contains(&other.word),
        ) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        };

        membership
            .then_with(|| other.number_of_buckets.cmp(&self.number_of_buckets))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (largest bucket {}, {} buckets, {:.3} bits)",
            self.word, self.size_of_largest_bucket, self.number_of_buckets, self.entropy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn series(texts: &[&str]) -> WordSeries {
        WordSeries::new(texts.iter().map(|t| word(t)).collect()).unwrap()
    }

    fn guess(text: &str, sizes: &[usize]) -> Guess {
        Guess::from_bucket_sizes(word(text), sizes.iter().copied())
    }

    #[test]
    fn create_computes_statistics() {
        let mut histogram = FxHashMap::default();
        histogram.insert(Score::new(0), 3);
        histogram.insert(Score::new(5), 1);
        histogram.insert(Score::new(242), 1);

        let g = Guess::create(word("crane"), &histogram);
        assert_eq!(g.size_of_largest_bucket, 3);
        assert_eq!(g.number_of_buckets, 3);

        // p = [3/5, 1/5, 1/5]
        let expected = -(0.6f64 * 0.6f64.log2() + 2.0 * 0.2 * 0.2f64.log2());
        assert!((g.entropy - expected).abs() < 1e-9);
    }

    #[test]
    fn uniform_buckets_give_log2_entropy() {
        let g = guess("crane", &[1, 1, 1, 1]);
        assert!((g.entropy - 2.0).abs() < 1e-9);

        let single = guess("crane", &[7]);
        assert!(single.entropy.abs() < 1e-9);
    }

    #[test]
    fn smaller_largest_bucket_wins() {
        let common = series(&["crane", "slate"]);
        let a = guess("slate", &[2, 2]);
        let b = guess("crane", &[3, 1]);
        assert!(a.improves_upon(&b, &common));
        assert!(!b.improves_upon(&a, &common));
    }

    #[test]
    fn membership_breaks_ties_before_bucket_count() {
        // Same largest bucket; the candidate-set member wins even though the
        // outsider discriminates into more buckets.
        let common = series(&["slate"]);
        let member = guess("slate", &[2, 1]);
        let outsider = guess("crane", &[2, 1, 1, 1]);
        assert!(member.improves_upon(&outsider, &common));
        assert!(!outsider.improves_upon(&member, &common));
    }

    #[test]
    fn more_buckets_wins_between_members() {
        let common = series(&["crane", "slate"]);
        let fine = guess("slate", &[2, 1, 1]);
        let coarse = guess("crane", &[2, 2]);
        assert!(fine.improves_upon(&coarse, &common));
    }

    #[test]
    fn lexical_order_is_the_final_tie_break() {
        let common = series(&["crane", "slate"]);
        let a = guess("crane", &[2, 1]);
        let b = guess("slate", &[2, 1]);
        assert!(a.improves_upon(&b, &common));
        assert!(!b.improves_upon(&a, &common));
    }

    #[test]
    fn minimax_order_is_strict_and_total() {
        let common = series(&["crane", "slate"]);
        let a = guess("crane", &[2, 1]);
        let b = guess("slate", &[3]);
        assert_eq!(
            a.minimax_cmp(&b, &common),
            b.minimax_cmp(&a, &common).reverse()
        );
        assert_eq!(a.minimax_cmp(&a, &common), Ordering::Equal);
    }

    #[test]
    fn entropy_order_prefers_higher_entropy() {
        let common = series(&["crane", "slate"]);
        let spread = guess("slate", &[1, 1, 1, 1]);
        let lumped = guess("crane", &[3, 1]);
        assert_eq!(spread.entropy_cmp(&lumped, &common), Ordering::Less);
    }

    #[test]
    fn entropy_ties_fall_back_to_minimax_chain() {
        let common = series(&["slate"]);
        let member = guess("slate", &[1, 1]);
        let outsider = guess("crane", &[1, 1]);
        assert_eq!(member.entropy_cmp(&outsider, &common), Ordering::Less);
    }
}
