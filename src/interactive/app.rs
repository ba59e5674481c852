//! TUI application state and logic

use crate::error::GuessError;
use crate::game::{Clock, Countdown, DailyGame, GameStatus, Key};
use crate::session::Storage;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the countdown is refreshed
const TICK_RATE: Duration = Duration::from_secs(1);

/// Application state
pub struct App<S: Storage, C: Clock> {
    pub game: DailyGame<S, C>,
    pub messages: Vec<Message>,
    pub countdown: Option<Countdown>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: Storage, C: Clock> App<S, C> {
    #[must_use]
    pub fn new(game: DailyGame<S, C>) -> Self {
        let countdown = game.countdown();
        let mut app = Self {
            game,
            messages: Vec::new(),
            countdown,
            should_quit: false,
        };

        if app.game.state().guesses().is_empty() {
            app.add_message(
                "Type a code and press Enter. Esc quits.",
                MessageStyle::Info,
            );
        } else {
            app.add_message("Welcome back! Today's guesses restored.", MessageStyle::Info);
        }
        app
    }

    /// Refresh the countdown and pick up a new day
    pub fn on_tick(&mut self) {
        let tick = self.game.tick();
        self.countdown = tick.countdown;
        if tick.rolled_over {
            self.messages.clear();
            self.add_message("A new airport is ready!", MessageStyle::Info);
        }
    }

    /// Handle a single key event
    pub fn on_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let game_key = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(c) => Key::Letter(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            _ => return,
        };

        if let Some(result) = self.game.handle_key(game_key) {
            self.on_submission(result);
        }
    }

    fn on_submission(&mut self, result: Result<crate::core::Code, GuessError>) {
        match result {
            Ok(_) => match self.game.state().status() {
                GameStatus::Won => {
                    let celebration = match self.game.state().guesses().len() {
                        1 => "🎯 Direct flight! First try!",
                        2 => "🔥 Magnificent! Two guesses!",
                        3 => "✨ Splendid! Three guesses!",
                        4 => "👏 Great job! Four guesses!",
                        5 => "🎉 Nice work! Five guesses!",
                        _ => "😅 Phew! Landed on the last try!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                }
                GameStatus::Lost => {
                    let text = format!(
                        "Ah, a shame. The correct code was {}!",
                        self.game.state().solution()
                    );
                    self.add_message(&text, MessageStyle::Error);
                }
                GameStatus::Playing => {}
            },
            Err(err @ GuessError::UnknownCode(_)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            // Incomplete input is ignored silently
            Err(_) => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage, C: Clock>(app: App<S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: Storage, C: Clock>(
    terminal: &mut Terminal<B>,
    mut app: App<S, C>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        } else {
            app.on_tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
