//! Reading URL lists and pages from a file or stdin.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Whole input as text. `None` or `-` reads stdin.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path.filter(|p| p.as_os_str() != "-") {
        Some(p) => fs::read_to_string(p).with_context(|| format!("read input: {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Non-empty, trimmed lines of the input.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    Ok(split_lines(&read_text(path)?))
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
