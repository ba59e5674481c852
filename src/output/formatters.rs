//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, TileState};
use colored::{ColoredString, Colorize};

/// A guessed letter rendered as a coloured tile
#[must_use]
pub fn colored_tile(letter: char, tile: TileState) -> ColoredString {
    let text = format!(" {letter} ");
    match tile {
        TileState::Correct => text.white().bold().on_green(),
        TileState::Present => text.black().bold().on_yellow(),
        TileState::Absent => text.white().bold().on_bright_black(),
    }
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Code, feedback: &Feedback) -> String {
    guess
        .as_str()
        .chars()
        .zip(feedback.tiles())
        .map(|(letter, &tile)| colored_tile(letter, tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attempts in share notation: "3/6", or "X/6" for a lost game
#[must_use]
pub fn attempts_label(attempts: usize, max_guesses: usize, lost: bool) -> String {
    if lost {
        format!("X/{max_guesses}")
    } else {
        format!("{attempts}/{max_guesses}")
    }
}

/// Emoji grid of all rows, one line per guess
#[must_use]
pub fn emoji_grid(rows: &[Feedback]) -> String {
    rows.iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}
