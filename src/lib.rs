//! Guesswork - a word-deduction game solver
//!
//! Scores guesses against hidden solutions with exact/partial/absent
//! feedback, partitions candidate sets by feedback class, and picks
//! guesses by minimax or entropy ranking, optionally with multi-level
//! lookahead. Ships a simulator for known solutions (single and
//! multi-board), an adversarial evasion mode, and a parallel benchmarker.

pub mod commands;
pub mod core;
pub mod output;
pub mod sim;
pub mod solver;
pub mod wordlists;
