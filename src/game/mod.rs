//! Daily game logic
//!
//! This module selects the day's solution, holds the game state and drives it
//! from key presses and clock ticks.

pub mod clock;
pub mod daily;
mod engine;
mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use daily::Countdown;
pub use engine::{DailyGame, Key};
pub use state::{GameState, GameStatus, Row, Tick};
