//! Immutable game state and its reducers
//!
//! Every transition takes `&self` and returns a new `GameState`, so the shells
//! (TUI, line mode) never mutate game data directly.

use super::daily::{self, Countdown};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::core::{CODE_LENGTH, Code, Feedback, KeyState, KeyboardState, key_state};
use crate::error::GuessError;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use tracing::warn;

/// Progress of the day's game, derived from the guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won if the solution was guessed, lost once the attempts run out
    #[must_use]
    pub fn derive(guesses: &[Code], solution: &Code, max_guesses: usize) -> Self {
        if guesses.contains(solution) {
            Self::Won
        } else if guesses.len() >= max_guesses {
            Self::Lost
        } else {
            Self::Playing
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One line of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Submitted { guess: Code, feedback: Feedback },
    /// The row being typed, padded with spaces to three characters
    Input(String),
    Empty,
}

/// Result of a once-per-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub countdown: Option<Countdown>,
    /// The UTC date moved past the puzzle date of this state
    pub rolled_over: bool,
}

/// The complete state of one day's game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    date: NaiveDate,
    solution: Code,
    guesses: Vec<Code>,
    input: String,
    max_guesses: usize,
}

impl GameState {
    /// Build the state for the UTC day containing `now`
    ///
    /// `restored` are the guesses saved earlier the same day; anything beyond
    /// the attempt limit is dropped.
    #[must_use]
    pub fn load(
        catalog: &Catalog,
        config: &GameConfig,
        now: DateTime<Utc>,
        restored: Vec<Code>,
    ) -> Self {
        let mut guesses = restored;
        if guesses.len() > config.max_guesses {
            warn!(
                restored = guesses.len(),
                max = config.max_guesses,
                "dropping saved guesses beyond the attempt limit"
            );
            guesses.truncate(config.max_guesses);
        }

        Self {
            date: now.date_naive(),
            solution: daily::solution_for(catalog, config.epoch, now),
            guesses,
            input: String::new(),
            max_guesses: config.max_guesses,
        }
    }

    /// Puzzle date (UTC)
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn solution(&self) -> &Code {
        &self.solution
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    /// The partially typed guess
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::derive(&self.guesses, &self.solution, self.max_guesses)
    }

    /// Submit a candidate guess
    ///
    /// The candidate is upper-cased first. On success the guess is appended
    /// and the input buffer cleared.
    ///
    /// # Errors
    ///
    /// The state is left untouched and an error returned when:
    /// - the candidate is not exactly 3 characters (`WrongLength`)
    /// - the game is already won or lost (`NotPlaying`)
    /// - the candidate is not in the catalog (`UnknownCode`)
    ///
    /// # Examples
    /// ```
    /// use airport_wordle::catalog::Catalog;
    /// use airport_wordle::config::GameConfig;
    /// use airport_wordle::game::{GameState, GameStatus};
    /// use chrono::NaiveDate;
    ///
    /// let catalog = Catalog::parse("SFO\nSEA\nLAX").unwrap();
    /// let now = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    ///     .and_hms_opt(9, 0, 0).unwrap().and_utc();
    /// let state = GameState::load(&catalog, &GameConfig::default(), now, Vec::new());
    ///
    /// let state = state.submit_guess("sea", &catalog).unwrap();
    /// assert_eq!(state.guesses().len(), 1);
    /// assert!(state.submit_guess("XYZ", &catalog).is_err());
    ///
    /// let state = state.submit_guess("SFO", &catalog).unwrap();
    /// assert_eq!(state.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess(&self, candidate: &str, catalog: &Catalog) -> Result<Self, GuessError> {
        let guess = candidate.to_uppercase();

        let len = guess.chars().count();
        if len != CODE_LENGTH {
            return Err(GuessError::WrongLength(len));
        }

        let status = self.status();
        if status.is_over() {
            return Err(GuessError::NotPlaying(status));
        }

        let code = Code::new(&guess)
            .ok()
            .filter(|code| catalog.contains(code))
            .ok_or(GuessError::UnknownCode(guess))?;

        let mut next = self.clone();
        next.guesses.push(code);
        next.input.clear();
        Ok(next)
    }

    /// Submit the input buffer
    ///
    /// # Errors
    ///
    /// Same as [`GameState::submit_guess`].
    pub fn submit_input(&self, catalog: &Catalog) -> Result<Self, GuessError> {
        self.submit_guess(&self.input, catalog)
    }

    /// Append a typed letter
    ///
    /// Ignored unless the game is in progress, the key upper-cases to a single
    /// `A-Z` letter and the buffer holds fewer than 3 characters.
    #[must_use]
    pub fn push_letter(&self, key: char) -> Self {
        let mut upper = key.to_uppercase();
        let letter = match (upper.next(), upper.next()) {
            (Some(letter), None) if letter.is_ascii_uppercase() => letter,
            _ => return self.clone(),
        };

        if self.status().is_over() || self.input.chars().count() >= CODE_LENGTH {
            return self.clone();
        }

        let mut next = self.clone();
        next.input.push(letter);
        next
    }

    /// Delete the last typed character
    #[must_use]
    pub fn pop_letter(&self) -> Self {
        if self.status().is_over() {
            return self.clone();
        }
        let mut next = self.clone();
        next.input.pop();
        next
    }

    /// Replace the buffer with raw text entry
    ///
    /// Keeps at most 3 characters and upper-cases them; no letter filtering is
    /// done here, invalid input is caught on submission.
    #[must_use]
    pub fn set_input(&self, text: &str) -> Self {
        let mut next = self.clone();
        next.input = text.to_uppercase().chars().take(CODE_LENGTH).collect();
        next
    }

    #[must_use]
    pub fn clear_input(&self) -> Self {
        let mut next = self.clone();
        next.input.clear();
        next
    }

    /// Feedback for each submitted guess
    #[must_use]
    pub fn feedback(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::calculate(guess, &self.solution))
            .collect()
    }

    /// The full board: submitted rows, the input row, then empty rows
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        (0..self.max_guesses)
            .map(|i| match self.guesses.get(i) {
                Some(&guess) => Row::Submitted {
                    guess,
                    feedback: Feedback::calculate(&guess, &self.solution),
                },
                None if i == self.guesses.len() => {
                    Row::Input(format!("{:<width$}", self.input, width = CODE_LENGTH))
                }
                None => Row::Empty,
            })
            .collect()
    }

    /// Keyboard colour of a single letter
    #[must_use]
    pub fn key_state(&self, letter: u8) -> KeyState {
        key_state(letter.to_ascii_uppercase(), &self.guesses, &self.solution)
    }

    /// Keyboard colours of every letter
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_guesses(&self.guesses, &self.solution)
    }

    /// Countdown to the next puzzle and date-rollover detection
    #[must_use]
    pub fn tick(&self, now: DateTime<Utc>) -> Tick {
        Tick {
            countdown: Countdown::until_next_puzzle(now),
            rolled_over: now.date_naive() != self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState;

    fn catalog() -> Catalog {
        // Day 0 (2025-01-01) solution is SFO
        Catalog::parse("SFO\nSEA\nLAX\nJFK\nORD\nATL\nDEN\nBOS\nMIA").unwrap()
    }

    fn new_year_morning() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
            .and_utc()
    }

    fn fresh() -> GameState {
        GameState::load(&catalog(), &GameConfig::default(), new_year_morning(), Vec::new())
    }

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    #[test]
    fn load_selects_daily_solution() {
        let state = fresh();
        assert_eq!(state.solution().as_str(), "SFO");
        assert_eq!(state.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.attempts_left(), 6);
    }

    #[test]
    fn load_restores_status() {
        let won = GameState::load(
            &catalog(),
            &GameConfig::default(),
            new_year_morning(),
            vec![code("SEA"), code("SFO")],
        );
        assert_eq!(won.status(), GameStatus::Won);

        let lost = GameState::load(
            &catalog(),
            &GameConfig::default(),
            new_year_morning(),
            ["SEA", "LAX", "JFK", "ORD", "ATL", "DEN"].map(code).to_vec(),
        );
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn load_truncates_oversized_history() {
        let state = GameState::load(
            &catalog(),
            &GameConfig::default(),
            new_year_morning(),
            ["SEA", "LAX", "JFK", "ORD", "ATL", "DEN", "BOS"].map(code).to_vec(),
        );
        assert_eq!(state.guesses().len(), 6);
    }

    #[test]
    fn submit_valid_wrong_guess_consumes_attempt() {
        let state = fresh().set_input("sea");
        let next = state.submit_input(&catalog()).unwrap();

        assert_eq!(next.guesses(), &[code("SEA")]);
        assert_eq!(next.input(), "");
        assert_eq!(next.status(), GameStatus::Playing);
        assert_eq!(next.attempts_left(), 5);
    }

    #[test]
    fn submit_unknown_code_is_rejected_without_attempt() {
        let state = fresh();
        let err = state.submit_guess("XYZ", &catalog()).unwrap_err();
        assert_eq!(err, GuessError::UnknownCode("XYZ".to_string()));
        assert_eq!(err.to_string(), "Airport code \"XYZ\" does not exist!");

        // Well-formed length but not a code at all
        let err = state.submit_guess("A1B", &catalog()).unwrap_err();
        assert_eq!(err, GuessError::UnknownCode("A1B".to_string()));
        assert!(state.guesses().is_empty());
    }

    #[test]
    fn submit_wrong_length_is_rejected() {
        let state = fresh();
        assert_eq!(
            state.submit_guess("SF", &catalog()),
            Err(GuessError::WrongLength(2))
        );
        assert_eq!(
            state.submit_guess("SFOO", &catalog()),
            Err(GuessError::WrongLength(4))
        );
        assert_eq!(state.submit_input(&catalog()), Err(GuessError::WrongLength(0)));
    }

    #[test]
    fn winning_guess_ends_game() {
        let catalog = catalog();
        let state = fresh()
            .submit_guess("LAX", &catalog)
            .unwrap()
            .submit_guess("sfo", &catalog)
            .unwrap();

        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(
            state.submit_guess("SEA", &catalog),
            Err(GuessError::NotPlaying(GameStatus::Won))
        );
        assert_eq!(state.guesses().len(), 2);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let catalog = catalog();
        let mut state = fresh();
        for guess in ["SEA", "LAX", "JFK", "ORD", "ATL", "DEN"] {
            assert_eq!(state.status(), GameStatus::Playing);
            state = state.submit_guess(guess, &catalog).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.attempts_left(), 0);
        assert_eq!(
            state.submit_guess("SFO", &catalog),
            Err(GuessError::NotPlaying(GameStatus::Lost))
        );
        assert_eq!(state.guesses().len(), 6);
    }

    #[test]
    fn repeated_guesses_are_allowed() {
        let catalog = catalog();
        let state = fresh()
            .submit_guess("SEA", &catalog)
            .unwrap()
            .submit_guess("SEA", &catalog)
            .unwrap();
        assert_eq!(state.guesses(), &[code("SEA"), code("SEA")]);
    }

    #[test]
    fn push_letter_rules() {
        let state = fresh().push_letter('s').push_letter('F');
        assert_eq!(state.input(), "SF");

        // Non-letters and multi-letter upper-casing are ignored
        let state = state.push_letter('1').push_letter(' ').push_letter('ß');
        assert_eq!(state.input(), "SF");

        // Buffer is capped at three letters
        let state = state.push_letter('o').push_letter('x');
        assert_eq!(state.input(), "SFO");
    }

    #[test]
    fn pop_letter_removes_last() {
        let state = fresh().set_input("SF").pop_letter();
        assert_eq!(state.input(), "S");
        assert_eq!(state.pop_letter().pop_letter().input(), "");
    }

    #[test]
    fn typing_ignored_after_game_over() {
        let catalog = catalog();
        let won = fresh().submit_guess("SFO", &catalog).unwrap();
        assert_eq!(won.push_letter('A').input(), "");
    }

    #[test]
    fn set_input_truncates_and_uppercases() {
        assert_eq!(fresh().set_input("lax123").input(), "LAX");
        assert_eq!(fresh().set_input("a1").input(), "A1");
        assert_eq!(fresh().set_input("abc").clear_input().input(), "");
    }

    #[test]
    fn set_input_never_exceeds_code_length_after_uppercasing() {
        // ß upper-cases to SS, so the cut happens after upper-casing
        let state = fresh().set_input("ßßß");
        assert_eq!(state.input(), "SSS");
        assert_eq!(state.rows()[0], Row::Input("SSS".to_string()));

        assert_eq!(fresh().set_input("aß").input(), "ASS");
    }

    #[test]
    fn rows_layout() {
        let catalog = catalog();
        let state = fresh()
            .submit_guess("SEA", &catalog)
            .unwrap()
            .set_input("F");
        let rows = state.rows();

        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows[0],
            Row::Submitted {
                guess: code("SEA"),
                feedback: Feedback::calculate(&code("SEA"), &code("SFO")),
            }
        );
        assert_eq!(rows[1], Row::Input("F  ".to_string()));
        assert!(rows[2..].iter().all(|row| *row == Row::Empty));
    }

    #[test]
    fn rows_without_input_row_when_board_full() {
        let catalog = catalog();
        let mut state = fresh();
        for guess in ["SEA", "LAX", "JFK", "ORD", "ATL", "DEN"] {
            state = state.submit_guess(guess, &catalog).unwrap();
        }
        assert!(
            state
                .rows()
                .iter()
                .all(|row| matches!(row, Row::Submitted { .. }))
        );
    }

    #[test]
    fn feedback_and_keyboard() {
        let catalog = catalog();
        let state = fresh().submit_guess("SEA", &catalog).unwrap();

        assert_eq!(
            state.feedback()[0].tiles(),
            &[TileState::Correct, TileState::Absent, TileState::Absent]
        );
        assert_eq!(state.key_state(b's'), KeyState::Correct);
        assert_eq!(state.keyboard().get(b'E'), KeyState::Absent);
        assert_eq!(state.keyboard().get(b'F'), KeyState::Unused);
    }

    #[test]
    fn tick_detects_rollover() {
        let state = fresh();
        let same_day = state.tick(new_year_morning() + chrono::TimeDelta::hours(10));
        assert!(!same_day.rolled_over);
        assert!(same_day.countdown.is_some());

        let next_day = state.tick(new_year_morning() + chrono::TimeDelta::hours(16));
        assert!(next_day.rolled_over);
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::Playing.to_string(), "playing");
        assert_eq!(GameStatus::Won.to_string(), "won");
        assert_eq!(GameStatus::Lost.to_string(), "lost");
    }
}
