//! Airport code representation
//!
//! A Code stores a three-letter uppercase airport code as raw bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every code
pub const CODE_LENGTH: usize = 3;

/// A three-letter airport code
///
/// Invariant: always matches `[A-Z]{3}`. Serializes as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must be exactly 3 letters, got {0}")]
    InvalidLength(usize),
    #[error("Code must contain only letters A-Z")]
    InvalidCharacters,
}

impl Code {
    /// Create a new Code from a string
    ///
    /// The input is upper-cased before validation, so `"sfo"` and `"SFO"` are
    /// the same code. Surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The upper-cased text is not exactly 3 characters
    /// - Any character is outside `A-Z`
    ///
    /// # Examples
    /// ```
    /// use airport_wordle::core::Code;
    ///
    /// let code = Code::new("sfo").unwrap();
    /// assert_eq!(code.as_str(), "SFO");
    ///
    /// assert!(Code::new("SFOX").is_err());
    /// assert!(Code::new("S0F").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let upper = text.to_uppercase();

        let len = upper.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let bytes: [u8; CODE_LENGTH] = upper
            .as_bytes()
            .try_into()
            .map_err(|_| CodeError::InvalidCharacters)?;

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(CodeError::InvalidCharacters);
        }

        Ok(Self(bytes))
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Invariant: bytes are ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the code as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-2)
    ///
    /// # Panics
    /// Panics if position >= 3
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the code contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Code {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.as_str().to_string()
    }
}
