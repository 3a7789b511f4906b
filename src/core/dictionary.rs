//! Session dictionary
//!
//! Pairs the full guessable vocabulary with the restricted candidate-solution
//! set for one word length. Loaded once per session and read-only thereafter.

use super::word::{WordError, WordSeries};

/// The two word series of a solving session
///
/// `common_words` is the candidate-solution set and is always a subset of
/// `all_words`, the permitted guess vocabulary.
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    all_words: WordSeries,
    common_words: WordSeries,
}

impl Dictionary {
    /// Build a dictionary from a vocabulary and a candidate-solution set
    ///
    /// The vocabulary is extended to include every candidate, so the subset
    /// contract holds by construction.
    ///
    /// # Errors
    /// Returns `WordError::MixedLengths` if the two series disagree on word
    /// length.
    pub fn new(all_words: WordSeries, common_words: WordSeries) -> Result<Self, WordError> {
        if !all_words.is_empty()
            && !common_words.is_empty()
            && all_words.word_length() != common_words.word_length()
        {
            return Err(WordError::MixedLengths {
                expected: all_words.word_length(),
                found: common_words.word_length(),
            });
        }

        let word_length = common_words.word_length().max(all_words.word_length());
        let all_words = WordSeries::union(&[&all_words, &common_words]);

        Ok(Self {
            word_length,
            all_words,
            common_words,
        })
    }

    /// Word length shared by every word in the session
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// The (vocabulary, candidate-solution) pair
    #[inline]
    #[must_use]
    pub const fn words(&self) -> (&WordSeries, &WordSeries) {
        (&self.all_words, &self.common_words)
    }

    /// The full permitted-guess vocabulary
    #[inline]
    #[must_use]
    pub const fn all_words(&self) -> &WordSeries {
        &self.all_words
    }

    /// The candidate-solution set
    #[inline]
    #[must_use]
    pub const fn common_words(&self) -> &WordSeries {
        &self.common_words
    }
}
