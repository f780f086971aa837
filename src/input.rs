//! Token input for files and stdin

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the whole input, from a file when a path is given, stdin otherwise
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Split raw input into tokens
///
/// Without a delimiter, tokens are separated by ASCII whitespace. With one,
/// each line is split on the delimiter and tokens are trimmed. Empty tokens
/// are skipped in both modes.
pub fn tokenize(input: &str, delimiter: Option<char>) -> Vec<&str> {
    match delimiter {
        None => input.split_ascii_whitespace().collect(),
        Some(delim) => input
            .lines()
            .flat_map(|line| line.split(delim))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect(),
    }
}
