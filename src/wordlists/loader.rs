//! Word list loading
//!
//! Builds session dictionaries from the embedded lists or from files on
//! disk. The 5-letter lists ship inside the binary; every other size needs
//! explicit files.

use crate::core::{Dictionary, Word, WordSeries};
use crate::wordlists::{ANSWERS, GUESS_ONLY};
use anyhow::{bail, Context};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line, skipping blank and invalid lines
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice list into words, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Choice of word source for one side of the dictionary
enum Source<'a> {
    Embedded(&'a [&'a str]),
    File(&'a Path),
}

impl Source<'_> {
    fn load(&self) -> anyhow::Result<Vec<Word>> {
        match self {
            Self::Embedded(slice) => Ok(words_from_slice(slice)),
            Self::File(path) => load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display())),
        }
    }
}

/// Build a session dictionary for the given word length
///
/// The vocabulary is the union of the guessable and candidate lists, so
/// candidates are always guessable. `extras` are injected into both sides,
/// which lets the CLI accept a solution outside the stock lists.
///
/// # Errors
/// Fails when the length is outside the supported 1..=10 range (score
/// values are 16-bit), when a requested file cannot be read, when the
/// lists contain mixed lengths, or when a non-5 length is requested
/// without files.
pub fn load_dictionary(
    word_length: usize,
    extras: &[Word],
    words_path: Option<&Path>,
    answers_path: Option<&Path>,
) -> anyhow::Result<Dictionary> {
    if !(1..=10).contains(&word_length) {
        bail!("word length {word_length} is not supported (1 to 10)");
    }
    let answers = match answers_path {
        Some(path) => Source::File(path),
        None if word_length == 5 => Source::Embedded(ANSWERS),
        None => bail!("no embedded answer list for length {word_length}; pass --answers"),
    };
    let guesses = match words_path {
        Some(path) => Source::File(path),
        None if word_length == 5 => Source::Embedded(GUESS_ONLY),
        None => Source::Embedded(&[]),
    };

    let mut candidates = answers.load()?;
    candidates.extend_from_slice(extras);
    let mut vocabulary = guesses.load()?;
    vocabulary.extend_from_slice(&candidates);

    let common_words = WordSeries::new(candidates).context("invalid candidate word list")?;
    let all_words = WordSeries::new(vocabulary).context("invalid guessable word list")?;

    let dictionary = Dictionary::new(all_words, common_words)?;
    if dictionary.word_length() != word_length {
        bail!(
            "word lists contain {}-letter words, expected {word_length}",
            dictionary.word_length()
        );
    }
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "sl4te", "", "stare"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "stare");
    }

    #[test]
    fn embedded_dictionary_loads_for_length_five() {
        let dictionary = load_dictionary(5, &[], None, None).unwrap();
        assert_eq!(dictionary.word_length(), 5);
        assert_eq!(dictionary.common_words().len(), ANSWERS.len());
        assert!(dictionary.all_words().len() > dictionary.common_words().len());
    }

    #[test]
    fn extras_join_both_sides() {
        let extra = Word::new("qwxyz").unwrap();
        let dictionary = load_dictionary(5, &[extra.clone()], None, None).unwrap();
        assert!(dictionary.common_words().contains(&extra));
        assert!(dictionary.all_words().contains(&extra));
    }

    #[test]
    fn non_five_length_requires_files() {
        let result = load_dictionary(6, &[], None, None);
        assert!(result.is_err());
    }

    #[test]
    fn lengths_outside_score_range_are_rejected() {
        // 3^11 overflows u16, so 11-letter sessions must fail at load time
        // even when word list files are supplied.
        let dir = std::env::temp_dir().join("guesswork-length-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("elevens.txt");
        std::fs::write(&path, "abracadabra\n").unwrap();

        for (length, words, answers) in [
            (11, Some(path.as_path()), Some(path.as_path())),
            (0, None, None),
        ] {
            let result = load_dictionary(length, &[], words, answers);
            assert!(result.is_err(), "length {length} must be rejected");
        }
    }

    #[test]
    fn load_from_file_skips_blank_lines() {
        let dir = std::env::temp_dir().join("guesswork-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("list.txt");
        std::fs::write(&path, "crane\n\n  slate \nbad1x\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }
}
