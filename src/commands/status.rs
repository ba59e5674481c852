//! Daily status command
//!
//! Summarizes today's saved game without changing it.

use crate::core::{Code, Feedback};
use crate::game::{Clock, Countdown, DailyGame, GameStatus};
use crate::session::Storage;
use chrono::NaiveDate;

/// Snapshot of today's game
pub struct StatusReport {
    pub date: NaiveDate,
    /// 1-based puzzle number
    pub puzzle_number: i64,
    pub status: GameStatus,
    pub attempts: usize,
    pub max_guesses: usize,
    pub rows: Vec<(Code, Feedback)>,
    /// Revealed only once the game is over
    pub solution: Option<Code>,
    pub countdown: Option<Countdown>,
}

/// Build the status report for a loaded game
#[must_use]
pub fn daily_status<S: Storage, C: Clock>(game: &DailyGame<S, C>) -> StatusReport {
    let state = game.state();
    let status = state.status();

    StatusReport {
        date: state.date(),
        puzzle_number: game.day_index() + 1,
        status,
        attempts: state.guesses().len(),
        max_guesses: state.max_guesses(),
        rows: state
            .guesses()
            .iter()
            .copied()
            .zip(state.feedback())
            .collect(),
        solution: status.is_over().then_some(*state.solution()),
        countdown: game.countdown(),
    }
}
