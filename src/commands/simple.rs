//! Simple interactive CLI mode
//!
//! Text-based daily game without TUI: one guess per line.

use crate::config::DAILY_LABEL;
use crate::error::GuessError;
use crate::game::{Clock, DailyGame};
use crate::output::{print_board, print_game_over};
use crate::session::Storage;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
pub fn run_simple<S: Storage, C: Clock>(game: &mut DailyGame<S, C>) -> Result<()> {
    let stdin = io::stdin();
    play_lines(game, &mut stdin.lock())
}

/// Game loop over any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn play_lines<S: Storage, C: Clock, R: BufRead>(
    game: &mut DailyGame<S, C>,
    input: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║{:^46}║", "✈  AIRPORTLE  ✈");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("{DAILY_LABEL}");
    println!("Type a three-letter code and press Enter. 'quit' to exit.");

    loop {
        let tick = game.tick();
        if tick.rolled_over {
            println!("\n🔄 A new airport is ready!");
        }

        print_board(game.state());

        if game.state().status().is_over() {
            print_game_over(game.state());
            if let Some(countdown) = tick.countdown {
                println!("Next airport in: {countdown}\n");
            }
            return Ok(());
        }

        let prompt = format!(
            "Guess {}/{}",
            game.state().guesses().len() + 1,
            game.state().max_guesses()
        );
        let Some(line) = get_user_input(&prompt, input)? else {
            println!();
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Come back tomorrow!\n");
                return Ok(());
            }
            "" => {}
            _ => match game.submit_guess(&line) {
                Ok(_) => {}
                Err(err @ GuessError::UnknownCode(_)) => {
                    println!("{}", format!("❌ {err}").red());
                }
                Err(err) => println!("{}", format!("⚠ {err}").yellow()),
            },
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::GameConfig;
    use crate::game::{FixedClock, GameStatus};
    use crate::session::MemoryStorage;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn game() -> DailyGame<MemoryStorage, FixedClock> {
        let catalog = Catalog::parse("SFO\nSEA\nLAX\nJFK").unwrap();
        let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        DailyGame::start(catalog, GameConfig::default(), clock, MemoryStorage::new())
    }

    #[test]
    fn plays_until_won() {
        let mut game = game();
        let mut input = Cursor::new("lax\nxyz\n\nsf\nsfo\nsea\n");

        play_lines(&mut game, &mut input).unwrap();

        assert_eq!(game.state().status(), GameStatus::Won);
        let guesses: Vec<&str> = game.state().guesses().iter().map(|c| c.as_str()).collect();
        assert_eq!(guesses, ["LAX", "SFO"]);
    }

    #[test]
    fn quit_stops_early() {
        let mut game = game();
        let mut input = Cursor::new("sea\nquit\nsfo\n");

        play_lines(&mut game, &mut input).unwrap();

        assert_eq!(game.state().guesses().len(), 1);
        assert_eq!(game.state().status(), GameStatus::Playing);
    }

    #[test]
    fn end_of_input_stops() {
        let mut game = game();
        let mut input = Cursor::new("jfk\n");

        play_lines(&mut game, &mut input).unwrap();
        assert_eq!(game.state().guesses().len(), 1);
    }

    #[test]
    fn finished_game_returns_immediately() {
        let mut game = game();
        game.submit_guess("SFO").unwrap();
        let mut input = Cursor::new("sea\n");

        play_lines(&mut game, &mut input).unwrap();
        assert_eq!(game.state().guesses().len(), 1);
    }
}
