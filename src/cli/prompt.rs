//! Interactive prompts on stdin. Prompts go to stderr so stdout stays scriptable.

use crate::error::Result;
use std::io::{self, BufRead, Write};

fn read_line(prompt: &str) -> Result<String> {
    eprint!("{}", prompt);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Use the PIN given on the command line, or ask for it
pub fn resolve_pin(provided: Option<String>) -> Result<String> {
    match provided {
        Some(pin) => Ok(pin),
        None => read_line("Admin PIN: "),
    }
}

/// Ask a yes/no question; anything but yes declines
pub fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let answer = read_line(&format!("{} [y/N] ", question))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "ya")
}
