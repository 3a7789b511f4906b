//! Word lists
//!
//! The 5-letter lists are embedded in the binary at build time; other
//! lengths load from files via [`loader`].

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESS_ONLY, GUESS_ONLY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn guess_only_count_matches_const() {
        assert_eq!(GUESS_ONLY.len(), GUESS_ONLY_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn guess_only_words_are_valid() {
        for &word in GUESS_ONLY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn lists_are_disjoint() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        for word in GUESS_ONLY {
            assert!(!answers.contains(word), "'{word}' appears in both lists");
        }
    }
}
