//! Word and word-series representations
//!
//! A `Word` stores a fixed-length lowercase word together with a precomputed
//! numeric vector (one ordinal per letter) used for fast scoring. A
//! `WordSeries` is an ordered, duplicate-free collection of words sharing one
//! length.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A fixed-length word from the game alphabet
///
/// Equality, ordering and hashing are defined over the letter sequence;
/// the ordering is what makes guess tie-breaks deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    vector: Box<[u8]>,
}

/// Error type for invalid words and word collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters(String),
    MixedLengths { expected: usize, found: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters(word) => {
                write!(f, "Word '{word}' contains non-alphabetic characters")
            }
            Self::MixedLengths { expected, found } => {
                write!(f, "Expected a {expected}-letter word, got {found} letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased; any word length is accepted here. Length
    /// agreement is enforced where words are collected into a series.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, non-ASCII, or contains
    /// non-alphabetic characters.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        // Ordinal vector: 'a' -> 1, 'z' -> 26
        let vector: Box<[u8]> = text.bytes().map(|b| b - b'a' + 1).collect();

        Ok(Self { text, vector })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the precomputed comparison vector
    #[inline]
    #[must_use]
    pub fn vector(&self) -> &[u8] {
        &self.vector
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vector.len()
    }

    /// True if the word has no letters (never holds for a constructed Word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

static NEXT_SERIES_ID: AtomicU64 = AtomicU64::new(0);

fn next_series_id() -> u64 {
    NEXT_SERIES_ID.fetch_add(1, Ordering::Relaxed)
}

/// An ordered, duplicate-free collection of equal-length words
///
/// Words are kept sorted ascending, so membership tests are binary searches
/// and iteration order is deterministic. Every series carries a
/// session-unique identity used as a cache key; clones share the identity
/// because their content is identical.
#[derive(Debug, Clone)]
pub struct WordSeries {
    words: Vec<Word>,
    id: u64,
}

impl WordSeries {
    /// Build a series from a vector of words
    ///
    /// Sorts and deduplicates the input.
    ///
    /// # Errors
    /// Returns `WordError::MixedLengths` if the words do not all share one
    /// length.
    pub fn new(mut words: Vec<Word>) -> Result<Self, WordError> {
        if let Some(first) = words.first() {
            let expected = first.len();
            for word in &words {
                if word.len() != expected {
                    return Err(WordError::MixedLengths {
                        expected,
                        found: word.len(),
                    });
                }
            }
        }

        words.sort_unstable();
        words.dedup();
        Ok(Self::from_sorted(words))
    }

    /// Internal constructor for word vectors already sorted and unique
    pub(crate) fn from_sorted(words: Vec<Word>) -> Self {
        Self {
            words,
            id: next_series_id(),
        }
    }

    /// Session-unique identity of this series
    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Shared length of the words, or 0 for an empty series
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words.first().map_or(0, Word::len)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test by binary search
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// The underlying sorted words
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Keep the words whose mask position is true
    ///
    /// The mask must be aligned to this series' order.
    #[must_use]
    pub fn filter(&self, mask: &[bool]) -> Self {
        debug_assert_eq!(mask.len(), self.words.len(), "mask must align to series");
        let words = self
            .words
            .iter()
            .zip(mask)
            .filter_map(|(word, &keep)| keep.then(|| word.clone()))
            .collect();
        Self::from_sorted(words)
    }

    /// A new series containing this series plus one extra word
    ///
    /// # Errors
    /// Returns `WordError::MixedLengths` if the word's length disagrees.
    pub fn with_word(&self, word: &Word) -> Result<Self, WordError> {
        if !self.words.is_empty() && word.len() != self.word_length() {
            return Err(WordError::MixedLengths {
                expected: self.word_length(),
                found: word.len(),
            });
        }

        let mut words = self.words.clone();
        if let Err(insert_at) = words.binary_search(word) {
            words.insert(insert_at, word.clone());
        }
        Ok(Self::from_sorted(words))
    }

    /// Merge several series into one sorted, duplicate-free series
    ///
    /// All parts must share one word length.
    #[must_use]
    pub fn union(parts: &[&Self]) -> Self {
        let mut words: Vec<Word> = parts
            .iter()
            .flat_map(|series| series.words.iter().cloned())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self::from_sorted(words)
    }
}

impl<'a> IntoIterator for &'a WordSeries {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let w = word("crane");
        assert_eq!(w.text(), "crane");
        assert_eq!(w.len(), 5);
        assert_eq!(w.vector(), &[3, 18, 1, 14, 5]);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(word("CRANE").text(), "crane");
        assert_eq!(word("CrAnE"), word("crane"));
    }

    #[test]
    fn word_creation_invalid() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(matches!(
            Word::new("cran "),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(matches!(Word::new("crané"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_any_length_allowed() {
        assert_eq!(word("olea").len(), 4);
        assert_eq!(word("secretion").len(), 9);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        assert!(word("crane") < word("slate"));
        assert!(word("amble") < word("amend"));
    }

    #[test]
    fn series_sorts_and_dedupes() {
        let series = WordSeries::new(vec![word("slate"), word("crane"), word("slate")]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.words()[0].text(), "crane");
        assert_eq!(series.words()[1].text(), "slate");
    }

    #[test]
    fn series_rejects_mixed_lengths() {
        let result = WordSeries::new(vec![word("crane"), word("olea")]);
        assert!(matches!(
            result,
            Err(WordError::MixedLengths {
                expected: 5,
                found: 4
            })
        ));
    }

    #[test]
    fn series_contains() {
        let series = WordSeries::new(vec![word("crane"), word("slate")]).unwrap();
        assert!(series.contains(&word("crane")));
        assert!(!series.contains(&word("irate")));
    }

    #[test]
    fn series_filter_by_mask() {
        let series = WordSeries::new(vec![word("crane"), word("irate"), word("slate")]).unwrap();
        let filtered = series.filter(&[true, false, true]);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.contains(&word("crane")));
        assert!(filtered.contains(&word("slate")));
        assert!(!filtered.contains(&word("irate")));
    }

    #[test]
    fn series_with_word_inserts_sorted() {
        let series = WordSeries::new(vec![word("crane"), word("slate")]).unwrap();
        let extended = series.with_word(&word("irate")).unwrap();
        assert_eq!(extended.len(), 3);
        assert_eq!(extended.words()[1].text(), "irate");

        // Already-present word is a no-op
        let same = extended.with_word(&word("crane")).unwrap();
        assert_eq!(same.len(), 3);
    }

    #[test]
    fn series_with_word_rejects_wrong_length() {
        let series = WordSeries::new(vec![word("crane")]).unwrap();
        assert!(series.with_word(&word("olea")).is_err());
    }

    #[test]
    fn series_union_merges_without_duplicates() {
        let a = WordSeries::new(vec![word("crane"), word("slate")]).unwrap();
        let b = WordSeries::new(vec![word("slate"), word("irate")]).unwrap();
        let merged = WordSeries::union(&[&a, &b]);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn series_ids_are_unique_per_construction() {
        let a = WordSeries::new(vec![word("crane")]).unwrap();
        let b = WordSeries::new(vec![word("crane")]).unwrap();
        assert_ne!(a.id(), b.id());

        // A clone has identical content, so it keeps the identity
        let c = a.clone();
        assert_eq!(a.id(), c.id());
    }
}
