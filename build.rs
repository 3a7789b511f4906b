//! Embeds the stock 5-letter word lists as const arrays.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/answers-5.txt",
        "answers.rs",
        "ANSWERS",
        "Candidate-solution words for the 5-letter game",
    ),
    (
        "data/guesses-5.txt",
        "guesses.rs",
        "GUESS_ONLY",
        "Guessable words outside the candidate-solution set (5 letters)",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for &(input, output, const_name, doc) in LISTS {
        let content = fs::read_to_string(input)
            .unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));
        let words: Vec<&str> = content.lines().map(str::trim).collect();

        let mut source = format!("/// {doc}\npub const {const_name}: &[&str] = &[\n");
        for word in &words {
            let _ = writeln!(source, "    \"{word}\",");
        }
        let _ = writeln!(source, "];");
        let _ = writeln!(source);
        let _ = writeln!(source, "/// Number of words in {const_name}");
        let _ = writeln!(
            source,
            "pub const {const_name}_COUNT: usize = {};",
            words.len()
        );

        let path = Path::new(&out_dir).join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));

        println!("cargo:rerun-if-changed={input}");
    }
}
