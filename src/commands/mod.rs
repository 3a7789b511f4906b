//! Command implementations

pub mod benchmark;
pub mod evade;
pub mod simulate;
pub mod solve;

pub use benchmark::run_benchmark;
pub use evade::run_evade;
pub use simulate::run_simulate;
pub use solve::run_solve;

use std::io::{self, Write};

/// Prompt on stdout and read one trimmed lowercased line from stdin
fn read_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_lowercase())
}
