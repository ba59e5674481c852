//! Airportle - CLI
//!
//! Daily airport-code guessing game with TUI and plain-text modes.

use airport_wordle::{
    catalog::Catalog,
    commands::{build_schedule, daily_status, evaluate_guess, run_simple},
    config::GameConfig,
    game::{Clock, DailyGame, FixedClock, SystemClock},
    output::{print_evaluation, print_schedule, print_status_report},
    session::FileStorage,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "airportle",
    about = "Guess an airport's three-letter code daily!",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog: 'embedded' (default) or path to a file with one code per line
    #[arg(short, long, global = true, env = "AIRPORTLE_CATALOG", default_value = "embedded")]
    catalog: String,

    /// File holding today's saved guesses
    #[arg(short, long, global = true, env = "AIRPORTLE_STATE")]
    state: Option<PathBuf>,

    /// Play as of a given UTC date (YYYY-MM-DD) instead of today
    #[arg(short, long, global = true, env = "AIRPORTLE_DATE")]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show today's progress without playing
    Status,

    /// Score a guess against a solution
    Evaluate {
        /// The guessed code
        guess: String,

        /// Solution to score against
        #[arg(long)]
        solution: String,
    },

    /// List the codes of upcoming days
    Schedule {
        /// First date listed (default: today)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Number of days to list
        #[arg(short = 'n', long, default_value = "14")]
        days: usize,
    },
}

/// Load the catalog selected by the -c flag
fn load_catalog(source: &str) -> Result<Catalog> {
    match source {
        "embedded" => Catalog::embedded().context("embedded airport catalog is empty"),
        path => Catalog::from_file(path)
            .with_context(|| format!("failed to load airport catalog from {path}")),
    }
}

/// Default state file under the user's data directory
fn default_state_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("airportle-state.json"),
        |dir| dir.join("airportle").join("state.json"),
    )
}

fn make_clock(date: Option<NaiveDate>) -> Box<dyn Clock> {
    match date {
        Some(date) => Box::new(FixedClock::at_noon(date)),
        None => Box::new(SystemClock),
    }
}

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("airport_wordle=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = load_catalog(&cli.catalog)?;
    let config = GameConfig::default();
    let clock = make_clock(cli.date);
    let state_path = cli.state.unwrap_or_else(default_state_path);
    debug!(codes = catalog.len(), state = %state_path.display(), "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use airport_wordle::interactive::{App, run_tui};

            let game = DailyGame::start(catalog, config, clock, FileStorage::new(&state_path));
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = DailyGame::start(catalog, config, clock, FileStorage::new(&state_path));
            run_simple(&mut game)
        }
        Commands::Status => {
            let game = DailyGame::start(catalog, config, clock, FileStorage::new(&state_path));
            print_status_report(&daily_status(&game));
            Ok(())
        }
        Commands::Evaluate { guess, solution } => {
            let result = evaluate_guess(&guess, &solution, &catalog)?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Schedule { from, days } => {
            let from = from.unwrap_or_else(|| clock.now().date_naive());
            print_schedule(&build_schedule(&catalog, config.epoch, from, days));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_requires_explicit_solution() {
        // Scoring against today's code would reveal the hidden answer
        let err = Cli::try_parse_from(["airportle", "evaluate", "LAX"]).err();
        assert_eq!(
            err.map(|e| e.kind()),
            Some(clap::error::ErrorKind::MissingRequiredArgument)
        );

        let cli = Cli::try_parse_from(["airportle", "evaluate", "LAX", "--solution", "JAX"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Evaluate { guess, solution }) if guess == "LAX" && solution == "JAX"
        ));
    }

    #[test]
    fn play_is_default_command() {
        let cli = Cli::try_parse_from(["airportle", "--date", "2025-03-10"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 3, 10));
    }
}
