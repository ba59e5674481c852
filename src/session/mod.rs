//! Persistence of the day's game
//!
//! A `Storage` backend holds string entries; the `SessionStore` maps the
//! current day's guesses onto it.

mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::SessionStore;
