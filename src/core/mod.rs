//! Core domain types
//!
//! Words, word series, feedback scoring and the session dictionary.

mod dictionary;
mod score;
mod word;

pub use dictionary::Dictionary;
pub use score::{Score, Scorer};
pub use word::{Word, WordError, WordSeries};
