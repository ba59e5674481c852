//! Error types shared across the crate

use crate::game::GameStatus;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog construction failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Airport code catalog is empty; no daily solution can be selected")]
    Empty,

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a submitted guess is rejected
///
/// A rejected guess never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly 3 letters, got {0}")]
    WrongLength(usize),

    #[error("Game is already over ({0})")]
    NotPlaying(GameStatus),

    #[error("Airport code \"{0}\" does not exist!")]
    UnknownCode(String),
}

/// Session storage backend failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Saved session is corrupt: {0}")]
    Corrupt(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
