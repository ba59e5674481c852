//! Date-stamped persistence of the day's guesses
//!
//! Two entries are kept: the ISO date of the saved game and a JSON array of
//! the guesses. Guesses saved under another date are ignored on restore and
//! left in place until the next save overwrites them.

use super::storage::Storage;
use crate::config::GameConfig;
use crate::core::Code;
use crate::error::{StorageError, StorageResult};
use crate::game::daily::iso_date;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Saves and restores the guesses of the current day
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    date_key: String,
    guesses_key: String,
    max_guesses: usize,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S, config: &GameConfig) -> Self {
        Self {
            storage,
            date_key: config.date_key.clone(),
            guesses_key: config.guesses_key.clone(),
            max_guesses: config.max_guesses,
        }
    }

    /// Persist the guesses for `date`, overwriting any previous entry
    ///
    /// The guesses are written before the date.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn save(&mut self, date: NaiveDate, guesses: &[Code]) -> StorageResult<()> {
        let json = serde_json::to_string(guesses)?;
        // Date last: a partial write leaves a stale date that restore ignores
        self.storage.set_item(&self.guesses_key, &json)?;
        self.storage.set_item(&self.date_key, &iso_date(date))?;
        debug!(date = %date, guesses = guesses.len(), "session saved");
        Ok(())
    }

    /// Load the guesses saved for `today`
    ///
    /// Returns `Ok(None)` if nothing was saved today. A matching date with no
    /// guesses entry restores an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read, the guesses are not a
    /// JSON array of valid codes, or there are more guesses than attempts.
    pub fn load(&self, today: NaiveDate) -> StorageResult<Option<Vec<Code>>> {
        let stored_date = self.storage.get_item(&self.date_key)?;
        if stored_date.as_deref() != Some(iso_date(today).as_str()) {
            return Ok(None);
        }

        let guesses: Vec<Code> = match self.storage.get_item(&self.guesses_key)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };

        if guesses.len() > self.max_guesses {
            return Err(StorageError::Corrupt(format!(
                "{} guesses saved, at most {} allowed",
                guesses.len(),
                self.max_guesses
            )));
        }

        Ok(Some(guesses))
    }

    /// Guesses to resume `today` with
    ///
    /// Never fails: unreadable or corrupt state is logged and treated as a
    /// fresh day.
    pub fn restore(&self, today: NaiveDate) -> Vec<Code> {
        match self.load(today) {
            Ok(Some(guesses)) => {
                debug!(date = %today, guesses = guesses.len(), "session restored");
                guesses
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to restore saved guesses: {}, starting fresh", e);
                Vec::new()
            }
        }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
