//! Display functions for command results

use super::formatters::{attempts_label, colored_row, emoji_grid};
use crate::commands::{EvaluationResult, ScheduleEntry, StatusReport};
use crate::game::{GameState, GameStatus, Row};
use colored::Colorize;

/// Print the board of a game in progress
pub fn print_board(state: &GameState) {
    println!();
    for row in state.rows() {
        match row {
            Row::Submitted { guess, feedback } => {
                println!("   {}", colored_row(&guess, &feedback));
            }
            Row::Input(text) => {
                let cells: Vec<String> = text.chars().map(|c| format!("[{c}]")).collect();
                println!("   {}", cells.join(" ").bright_white());
            }
            Row::Empty => println!("   {}", "[ ] [ ] [ ]".bright_black()),
        }
    }
    println!();
}

/// Print the end-of-game notice
pub fn print_game_over(state: &GameState) {
    let solution = state.solution().to_string();
    match state.status() {
        GameStatus::Won => println!(
            "{}",
            format!(
                "✅ Solved in {}! The code was {solution}.",
                attempts_label(state.guesses().len(), state.max_guesses(), false)
            )
            .green()
            .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("Ah, a shame. The correct code was {solution}!")
                .red()
                .bold()
        ),
        GameStatus::Playing => {}
    }
}

/// Print today's status report
pub fn print_status_report(report: &StatusReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} #{} ({})",
        "AIRPORTLE".bright_cyan().bold(),
        report.puzzle_number,
        report.date
    );
    println!("{}", "═".repeat(40).cyan());

    let label = attempts_label(
        report.attempts,
        report.max_guesses,
        report.status == GameStatus::Lost,
    );
    println!("\n   Status:   {}", report.status.to_string().bright_yellow());
    println!("   Attempts: {label}");

    if !report.rows.is_empty() {
        println!();
        for (guess, feedback) in &report.rows {
            println!("   {}", colored_row(guess, feedback));
        }
        let feedback: Vec<_> = report.rows.iter().map(|(_, f)| *f).collect();
        println!("\n{}", emoji_grid(&feedback));
    }

    if let Some(solution) = report.solution {
        println!("\n   Solution: {}", solution.to_string().bright_green().bold());
    }
    if let Some(countdown) = report.countdown {
        println!("\n   Next airport in: {countdown}");
    }
}

/// Print the result of evaluating a guess
pub fn print_evaluation(result: &EvaluationResult) {
    println!(
        "\n   {}  vs {}",
        colored_row(&result.guess, &result.feedback),
        result.solution.to_string().bright_yellow().bold()
    );
    println!("   {}", result.feedback.to_emoji());
    if !result.in_catalog {
        println!(
            "   {}",
            format!("Note: {} is not in the catalog and would be rejected", result.guess)
                .bright_black()
        );
    }
}

/// Print a solution schedule
pub fn print_schedule(entries: &[ScheduleEntry]) {
    println!("\n{}", "─".repeat(32).cyan());
    println!(" {:<12} {:>6}  {}", "Date", "Day", "Code");
    println!("{}", "─".repeat(32).cyan());
    for entry in entries {
        println!(
            " {:<12} {:>6}  {}",
            entry.date.to_string(),
            entry.day_index,
            entry.code.to_string().bright_yellow()
        );
    }
}
