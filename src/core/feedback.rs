//! Per-letter feedback for a guessed code
//!
//! Each position is scored independently against the solution:
//! - `Correct` = same letter in the same position
//! - `Present` = letter appears anywhere in the solution
//! - `Absent`  = letter does not appear in the solution
//!
//! Unlike standard Wordle there is no letter-count bookkeeping: a letter that
//! appears once in the solution is marked `Present` at every non-matching
//! position where it is guessed.

use super::Code;
use super::code::CODE_LENGTH;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    Absent,
    Present,
    Correct,
}

impl TileState {
    /// Score a single letter at `position` against `solution`
    #[must_use]
    pub fn score(letter: u8, position: usize, solution: &Code) -> Self {
        if solution.letter_at(position) == letter {
            Self::Correct
        } else if solution.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Emoji square for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a full guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([TileState; CODE_LENGTH]);

impl Feedback {
    /// All tiles correct
    pub const SOLVED: Self = Self([TileState::Correct; CODE_LENGTH]);

    /// Calculate the feedback when `guess` is submitted against `solution`
    ///
    /// # Examples
    /// ```
    /// use airport_wordle::core::{Code, Feedback, TileState};
    ///
    /// let solution = Code::new("SFO").unwrap();
    /// let guess = Code::new("FSO").unwrap();
    /// let feedback = Feedback::calculate(&guess, &solution);
    ///
    /// assert_eq!(
    ///     feedback.tiles(),
    ///     &[TileState::Present, TileState::Present, TileState::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, solution: &Code) -> Self {
        let mut tiles = [TileState::Absent; CODE_LENGTH];
        for (position, (tile, &letter)) in tiles.iter_mut().zip(guess.letters()).enumerate() {
            *tile = TileState::score(letter, position, solution);
        }
        Self(tiles)
    }

    /// Get the per-position tile states
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[TileState; CODE_LENGTH] {
        &self.0
    }

    /// Check if every tile is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert feedback to an emoji string like "🟩⬜🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tile| tile.emoji()).collect()
    }
}
