//! Core domain types for the airport code game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and cheap to copy or compare.

mod code;
mod feedback;
mod keyboard;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use feedback::{Feedback, TileState};
pub use keyboard::{KEYBOARD_ROWS, KeyState, KeyboardState, key_state};
