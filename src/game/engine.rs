//! Main daily game driver

use super::clock::Clock;
use super::daily::{self, Countdown};
use super::state::{GameState, Tick};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::core::Code;
use crate::error::GuessError;
use crate::session::{SessionStore, Storage};
use tracing::{debug, info, warn};

/// A key press from either the on-screen or the physical keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

/// Daily game driver
///
/// Owns the catalog, the clock and the session store, feeds input through the
/// `GameState` reducers and persists every accepted guess.
pub struct DailyGame<S: Storage, C: Clock> {
    catalog: Catalog,
    config: GameConfig,
    clock: C,
    store: SessionStore<S>,
    state: GameState,
}

impl<S: Storage, C: Clock> DailyGame<S, C> {
    /// Load today's game, resuming any guesses saved earlier today
    pub fn start(catalog: Catalog, config: GameConfig, clock: C, storage: S) -> Self {
        let store = SessionStore::new(storage, &config);
        let state = Self::load_state(&catalog, &config, &clock, &store);

        Self {
            catalog,
            config,
            clock,
            store,
            state,
        }
    }

    fn load_state(
        catalog: &Catalog,
        config: &GameConfig,
        clock: &C,
        store: &SessionStore<S>,
    ) -> GameState {
        let now = clock.now();
        let restored = store.restore(now.date_naive());
        debug!(
            day = daily::day_index(config.epoch, now),
            restored = restored.len(),
            "daily game loaded"
        );
        GameState::load(catalog, config, now, restored)
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Day index of the loaded puzzle, counted from the epoch
    #[must_use]
    pub fn day_index(&self) -> i64 {
        daily::day_index(self.config.epoch, daily::midnight_utc(self.state.date()))
    }

    /// Countdown to the next puzzle as of now
    #[must_use]
    pub fn countdown(&self) -> Option<Countdown> {
        Countdown::until_next_puzzle(self.clock.now())
    }

    /// Apply a key press
    ///
    /// Keys are ignored once the game is over. Returns the submission result
    /// for `Enter`, `None` for every other key.
    pub fn handle_key(&mut self, key: Key) -> Option<Result<Code, GuessError>> {
        if self.state.status().is_over() {
            return None;
        }

        match key {
            Key::Letter(letter) => {
                self.state = self.state.push_letter(letter);
                None
            }
            Key::Backspace => {
                self.state = self.state.pop_letter();
                None
            }
            Key::Enter => Some(self.submit()),
        }
    }

    /// Replace the input buffer with raw text entry
    pub fn set_input(&mut self, text: &str) {
        self.state = self.state.set_input(text);
    }

    /// Submit the input buffer
    ///
    /// # Errors
    ///
    /// See [`DailyGame::submit_guess`].
    pub fn submit(&mut self) -> Result<Code, GuessError> {
        let input = self.state.input().to_string();
        self.submit_guess(&input)
    }

    /// Submit a candidate guess and persist the result
    ///
    /// # Errors
    ///
    /// Returns the rejection from [`GameState::submit_guess`]. An unknown code
    /// also clears the input buffer; no attempt is consumed either way.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<Code, GuessError> {
        match self.state.submit_guess(candidate, &self.catalog) {
            Ok(next) => {
                self.state = next;
                let guess = self.state.guesses()[self.state.guesses().len() - 1];
                self.persist();
                debug!(%guess, status = %self.state.status(), "guess accepted");
                Ok(guess)
            }
            Err(err) => {
                if matches!(err, GuessError::UnknownCode(_)) {
                    self.state = self.state.clear_input();
                }
                Err(err)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.state.date(), self.state.guesses()) {
            warn!("Failed to save guesses: {}", e);
        }
    }

    /// Once-per-second update
    ///
    /// When the UTC date has moved past the loaded puzzle, the new day's game
    /// is loaded before the tick is returned.
    pub fn tick(&mut self) -> Tick {
        let now = self.clock.now();
        let tick = self.state.tick(now);

        if tick.rolled_over {
            info!(
                from = %self.state.date(),
                to = %now.date_naive(),
                "new puzzle day"
            );
            self.state = Self::load_state(&self.catalog, &self.config, &self.clock, &self.store);
        }

        tick
    }

    /// Tear down the game, returning the storage backend
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
