//! Regex construction for the static pattern tables.

use regex::Regex;

/// Compiles one of the crate's built-in patterns. They are fixed at build
/// time, so a failure is a bug and panics with the offending pattern.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}
