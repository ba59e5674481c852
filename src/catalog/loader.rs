//! Catalog loading utilities
//!
//! Parses newline-delimited code lists from text, files, or embedded constants.

use crate::core::Code;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a single catalog line
///
/// Leading and trailing whitespace is trimmed before the line is upper-cased
/// and validated. Anything that is not exactly three letters yields `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<Code> {
    Code::new(line.trim()).ok()
}

/// Parse newline-delimited catalog text
///
/// Accepts `\n` and `\r\n` line endings. Malformed lines are dropped silently
/// and the remaining codes keep their file order. Duplicates are kept.
///
/// # Examples
/// ```
/// use airport_wordle::catalog::loader::parse_codes;
///
/// let codes = parse_codes("code\r\n sfo \nLAX\n\n12A\n");
/// let text: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
/// assert_eq!(text, ["SFO", "LAX"]);
/// ```
#[must_use]
pub fn parse_codes(text: &str) -> Vec<Code> {
    text.lines().filter_map(parse_line).collect()
}

/// Load codes from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use airport_wordle::catalog::loader::load_from_file;
///
/// let codes = load_from_file("data/airport_codes.csv").unwrap();
/// println!("Loaded {} codes", codes.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Code>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_codes(&content))
}

/// Convert embedded raw lines to codes
///
/// # Examples
/// ```
/// use airport_wordle::catalog::loader::codes_from_slice;
///
/// let codes = codes_from_slice(&["code", "jfk", "SEA"]);
/// assert_eq!(codes.len(), 2);
/// ```
#[must_use]
pub fn codes_from_slice(slice: &[&str]) -> Vec<Code> {
    slice.iter().copied().filter_map(parse_line).collect()
}
