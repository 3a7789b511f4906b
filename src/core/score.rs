//! Feedback score calculation and representation
//!
//! A score encodes per-position feedback in base 3, most-significant digit
//! first (position 0 is the highest power of 3):
//! - 2 = exact match (right letter, right position)
//! - 1 = partial match (letter present elsewhere)
//! - 0 = absent
//!
//! For a word length L the score is an integer in `[0, 3^L)`, and `3^L - 1`
//! is the unique perfect score.

use super::word::{Word, WordSeries};
use rustc_hash::FxHashMap;

/// Feedback score for one (solution, guess) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u16);

impl Score {
    /// Create a score from a raw base-3 value
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Raw value in `[0, 3^L)`
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Render as a base-3 digit string, most-significant digit first,
    /// zero-padded to the word length
    #[must_use]
    pub fn to_ternary(self, length: usize) -> String {
        let mut digits = vec![b'0'; length];
        let mut value = self.0;
        for slot in digits.iter_mut().rev() {
            *slot = b'0' + (value % 3) as u8;
            value /= 3;
        }
        String::from_utf8(digits).unwrap_or_default()
    }

    /// Parse a zero-padded base-3 digit string, most-significant digit first
    ///
    /// Returns `None` if the string is the wrong length or contains digits
    /// outside 0..=2.
    #[must_use]
    pub fn from_ternary(text: &str, length: usize) -> Option<Self> {
        if text.len() != length {
            return None;
        }

        let mut value = 0u16;
        for c in text.chars() {
            let digit = match c {
                '0' => 0,
                '1' => 1,
                '2' => 2,
                _ => return None,
            };
            value = value * 3 + digit;
        }
        Some(Self(value))
    }
}

/// Pure feedback scoring for one fixed word length
///
/// Precomputes the powers of 3 so every comparison is integer arithmetic
/// over the words' ordinal vectors.
#[derive(Debug, Clone)]
pub struct Scorer {
    length: usize,
    powers: Vec<u16>,
    perfect: Score,
}

impl Scorer {
    /// Create a scorer for words of the given length
    #[must_use]
    pub fn new(length: usize) -> Self {
        debug_assert!(
            (1..=10).contains(&length),
            "score values must fit in 16 bits"
        );

        // powers[i] = 3^(L-1-i): position 0 is the most significant digit
        let powers: Vec<u16> = (0..length)
            .rev()
            .map(|exponent| 3u16.pow(exponent as u32))
            .collect();
        let perfect = Score::new(3u16.pow(length as u32) - 1);

        Self {
            length,
            powers,
            perfect,
        }
    }

    /// Word length this scorer operates on
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// The all-exact score for this word length
    #[inline]
    #[must_use]
    pub const fn perfect_score(&self) -> Score {
        self.perfect
    }

    /// True if the score is the unique all-exact value
    #[inline]
    #[must_use]
    pub fn is_perfect_score(&self, score: Score) -> bool {
        score == self.perfect
    }

    /// Score a guess against a known solution
    ///
    /// Exact matches are marked first. Each remaining guess position is then
    /// credited as a partial match only while unmatched copies of its letter
    /// remain in the solution, scanning left to right, so earlier duplicate
    /// letters take precedence over later ones.
    #[must_use]
    pub fn score_word(&self, solution: &Word, guess: &Word) -> Score {
        let solution = solution.vector();
        let guess = guess.vector();
        debug_assert_eq!(solution.len(), self.length, "solution length mismatch");
        debug_assert_eq!(guess.len(), self.length, "guess length mismatch");

        let mut value = 0u16;
        let mut exact = vec![false; self.length];

        for i in 0..self.length {
            if solution[i] == guess[i] {
                exact[i] = true;
                value += 2 * self.powers[i];
            }
        }

        for i in 0..self.length {
            if exact[i] {
                continue;
            }

            let letter = guess[i];

            let already_observed = (0..i)
                .filter(|&j| !exact[j] && guess[j] == letter)
                .count();
            let available_in_solution = (0..self.length)
                .filter(|&j| !exact[j] && solution[j] == letter)
                .count();

            if already_observed < available_in_solution {
                value += self.powers[i];
            }
        }

        Score::new(value)
    }

    /// Partition candidates into the groups that share a feedback score
    ///
    /// Every candidate lands in exactly one bucket and the buckets together
    /// cover the input set exactly.
    #[must_use]
    pub fn get_solutions_by_score(
        &self,
        candidates: &WordSeries,
        guess: &Word,
    ) -> FxHashMap<Score, WordSeries> {
        let mut grouped: FxHashMap<Score, Vec<Word>> = FxHashMap::default();
        for candidate in candidates {
            let score = self.score_word(candidate, guess);
            grouped.entry(score).or_default().push(candidate.clone());
        }

        // Candidates are iterated in sorted order, so each bucket is sorted
        grouped
            .into_iter()
            .map(|(score, words)| (score, WordSeries::from_sorted(words)))
            .collect()
    }

    /// Bucket sizes of the same partition, without materializing the subsets
    #[must_use]
    pub fn get_histogram(&self, candidates: &WordSeries, guess: &Word) -> FxHashMap<Score, usize> {
        let mut histogram: FxHashMap<Score, usize> = FxHashMap::default();
        for candidate in candidates {
            let score = self.score_word(candidate, guess);
            *histogram.entry(score).or_insert(0) += 1;
        }
        histogram
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

    #[test]
    fn perfect_score_value() {
        assert_eq!(Scorer::new(5).perfect_score().value(), 242);
        assert_eq!(Scorer::new(4).perfect_score().value(), 80);
        assert_eq!(Scorer::new(9).perfect_score().value(), 19682);
    }

    #[test]
    fn self_score_is_perfect() {
        let scorer = Scorer::new(5);
        for text in ["crane", "slate", "speed", "aaaaa", "zzzzz"] {
            let w = word(text);
            assert!(scorer.is_perfect_score(scorer.score_word(&w, &w)));
        }
    }

    #[test]
    fn perfect_score_iff_equal() {
        let scorer = Scorer::new(5);
        let words = ["crane", "crate", "slate", "speed", "erase"];
        for solution in words {
            for guess in words {
                let score = scorer.score_word(&word(solution), &word(guess));
                assert_eq!(scorer.is_perfect_score(score), solution == guess);
            }
        }
    }

    #[test]
    fn all_absent_scores_zero() {
        let scorer = Scorer::new(5);
        let score = scorer.score_word(&word("fghij"), &word("abcde"));
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn crane_against_slate() {
        // c r a n e vs slate: digits 0 0 2 0 2 (MSB first)
        let scorer = Scorer::new(5);
        let score = scorer.score_word(&word("slate"), &word("crane"));
        assert_eq!(score.value(), 2 * 9 + 2);
        assert_eq!(score.to_ternary(5), "00202");
    }

    #[test]
    fn duplicate_letters_consumed_by_exact_match() {
        // Guess "aabbb" against solution "abcde": the exact A at position 0
        // consumes the solution's only A, so the second A scores absent.
        // Digits: 2 0 1 0 0
        let scorer = Scorer::new(5);
        let score = scorer.score_word(&word("abcde"), &word("aabbb"));
        assert_eq!(score.value(), 2 * 81 + 9);
        assert_eq!(score.to_ternary(5), "20100");
    }

    #[test]
    fn duplicate_letters_first_unmatched_takes_precedence() {
        // Guess "speed" against solution "abide" (one E): only the first
        // unmatched E is credited partial, the second is absent.
        // Digits: 0 0 1 0 1
        let scorer = Scorer::new(5);
        let score = scorer.score_word(&word("abide"), &word("speed"));
        assert_eq!(score.value(), 9 + 1);
        assert_eq!(score.to_ternary(5), "00101");
    }

    #[test]
    fn duplicate_letters_both_credited_when_solution_has_two() {
        // Guess "speed" against solution "erase" (two Es): both Es are
        // partial. Digits: 1 0 1 1 0
        let scorer = Scorer::new(5);
        let score = scorer.score_word(&word("erase"), &word("speed"));
        assert_eq!(score.value(), 81 + 9 + 3);
        assert_eq!(score.to_ternary(5), "10110");
    }

    #[test]
    fn duplicate_letters_mixed_exact_and_partial() {
        // Guess "robot" against solution "floor": the second O is exact, the
        // first O and the R are partial. Digits: 1 1 0 2 0
        let scorer = Scorer::new(5);
        let score = scorer.score_word(&word("floor"), &word("robot"));
        assert_eq!(score.value(), 81 + 27 + 2 * 3);
        assert_eq!(score.to_ternary(5), "11020");
    }

    #[test]
    fn ternary_round_trip() {
        let scorer = Scorer::new(5);
        let score = scorer.score_word(&word("slate"), &word("crane"));
        let rendered = score.to_ternary(5);
        assert_eq!(Score::from_ternary(&rendered, 5), Some(score));

        assert_eq!(Score::from_ternary("22222", 5), Some(Score::new(242)));
        assert_eq!(Score::from_ternary("00000", 5), Some(Score::new(0)));
        assert!(Score::from_ternary("2222", 5).is_none());
        assert!(Score::from_ternary("2222x", 5).is_none());
        assert!(Score::from_ternary("22223", 5).is_none());
    }

    #[test]
    fn partition_is_a_disjoint_cover() {
        let scorer = Scorer::new(5);
        let candidates = series(&["crane", "crate", "grate", "irate", "slate", "speed"]);
        let buckets = scorer.get_solutions_by_score(&candidates, &word("trace"));

        let total: usize = buckets.values().map(WordSeries::len).sum();
        assert_eq!(total, candidates.len());

        for candidate in &candidates {
            let holding: Vec<_> = buckets
                .values()
                .filter(|bucket| bucket.contains(candidate))
                .collect();
            assert_eq!(holding.len(), 1, "{candidate} must be in exactly one bucket");
        }
    }

    #[test]
    fn histogram_matches_partition_sizes() {
        let scorer = Scorer::new(5);
        let candidates = series(&["crane", "crate", "grate", "irate", "slate"]);
        let guess = word("raise");

        let buckets = scorer.get_solutions_by_score(&candidates, &guess);
        let histogram = scorer.get_histogram(&candidates, &guess);

        assert_eq!(buckets.len(), histogram.len());
        for (score, bucket) in &buckets {
            assert_eq!(histogram.get(score), Some(&bucket.len()));
        }
    }
}
