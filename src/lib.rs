//! Airportle
//!
//! A daily Wordle-style puzzle over three-letter IATA airport codes. Every UTC
//! day selects one code from the catalog; players get six attempts with
//! per-letter feedback, and progress is saved for the rest of the day.
//!
//! # Quick Start
//!
//! ```rust
//! use airport_wordle::catalog::Catalog;
//! use airport_wordle::config::GameConfig;
//! use airport_wordle::game::{DailyGame, FixedClock, GameStatus};
//! use airport_wordle::session::MemoryStorage;
//! use chrono::NaiveDate;
//!
//! let catalog = Catalog::parse("SFO\nSEA\nLAX").unwrap();
//! let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//! let mut game = DailyGame::start(catalog, GameConfig::default(), clock, MemoryStorage::new());
//!
//! game.submit_guess("sea").unwrap();
//! game.submit_guess("SFO").unwrap();
//! assert_eq!(game.state().status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Airport code catalog
pub mod catalog;

// Game rules and storage keys
pub mod config;

pub mod error;

// Daily selection and game state
pub mod game;

// Persisted progress
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
