//! On-screen keyboard colouring
//!
//! Aggregates the feedback of every submitted guess into one state per letter.

use super::Code;
use super::feedback::TileState;
use rustc_hash::FxHashMap;

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Aggregated state of a keyboard letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum KeyState {
    /// Letter not guessed yet
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<TileState> for KeyState {
    fn from(tile: TileState) -> Self {
        match tile {
            TileState::Absent => Self::Absent,
            TileState::Present => Self::Present,
            TileState::Correct => Self::Correct,
        }
    }
}

/// Compute the state of `letter` across all `guesses`
///
/// Guesses are scanned in submission order and positions left to right. The
/// first position match returns `Correct` immediately; every other occurrence
/// overwrites the running state, so the last occurrence decides between
/// `Present` and `Absent`.
///
/// # Examples
/// ```
/// use airport_wordle::core::{Code, KeyState, key_state};
///
/// let solution = Code::new("SFO").unwrap();
/// let guesses = [Code::new("FRA").unwrap(), Code::new("LAX").unwrap()];
///
/// assert_eq!(key_state(b'F', &guesses, &solution), KeyState::Present);
/// assert_eq!(key_state(b'A', &guesses, &solution), KeyState::Absent);
/// assert_eq!(key_state(b'Z', &guesses, &solution), KeyState::Unused);
/// ```
#[must_use]
pub fn key_state(letter: u8, guesses: &[Code], solution: &Code) -> KeyState {
    let mut state = KeyState::Unused;

    for guess in guesses.iter().filter(|guess| guess.has_letter(letter)) {
        for (position, &guessed) in guess.letters().iter().enumerate() {
            if guessed != letter {
                continue;
            }
            match TileState::score(letter, position, solution) {
                TileState::Correct => return KeyState::Correct,
                tile => state = tile.into(),
            }
        }
    }

    state
}

/// Key states for every letter on the keyboard
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    states: FxHashMap<u8, KeyState>,
}

impl KeyboardState {
    /// Aggregate the state of all 26 letters
    #[must_use]
    pub fn from_guesses(guesses: &[Code], solution: &Code) -> Self {
        let states = KEYBOARD_ROWS
            .iter()
            .flat_map(|row| row.bytes())
            .map(|letter| (letter, key_state(letter, guesses, solution)))
            .collect();
        Self { states }
    }

    /// State of a single letter; unknown bytes report `Unused`
    #[must_use]
    pub fn get(&self, letter: u8) -> KeyState {
        self.states
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }
}
