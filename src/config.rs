//! Game configuration
//!
//! Defaults reproduce the rules of the published daily game. Tests and replays
//! may override the epoch or the attempt limit.

use chrono::NaiveDate;

/// Maximum number of attempts per day
pub const MAX_GUESSES: usize = 6;

/// Storage key holding the ISO date of the saved guesses
pub const DATE_KEY: &str = "airportWordleDate";

/// Storage key holding the JSON array of saved guesses
pub const GUESSES_KEY: &str = "airportWordleGuesses";

/// Heading shown above the board
pub const DAILY_LABEL: &str = "Guess an airport's three-letter code daily!";

/// First puzzle day (day index 0)
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Rules and storage layout of a daily game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Day index 0, counted from midnight UTC
    pub epoch: NaiveDate,
    pub max_guesses: usize,
    pub date_key: String,
    pub guesses_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            max_guesses: MAX_GUESSES,
            date_key: DATE_KEY.to_string(),
            guesses_key: GUESSES_KEY.to_string(),
        }
    }
}
