//! TUI rendering with ratatui
//!
//! Board, countdown, keyboard and messages for the daily game.

use super::app::{App, MessageStyle};
use crate::config::DAILY_LABEL;
use crate::core::{KEYBOARD_ROWS, KeyState, TileState};
use crate::game::{Clock, GameStatus, Row};
use crate::session::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("✈ AIRPORTLE ✈  {DAILY_LABEL}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tile_style(tile: TileState) -> Style {
    let bg = match tile {
        TileState::Correct => Color::Green,
        TileState::Present => Color::Yellow,
        TileState::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn board_line(row: &Row) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    match row {
        Row::Submitted { guess, feedback } => {
            for (&letter, &tile) in guess.letters().iter().zip(feedback.tiles()) {
                spans.push(Span::styled(format!(" {} ", letter as char), tile_style(tile)));
                spans.push(Span::raw(" "));
            }
        }
        Row::Input(text) => {
            for c in text.chars() {
                spans.push(Span::styled(
                    format!("[{c}]"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        }
        Row::Empty => {
            spans.push(Span::styled(
                "[ ] [ ] [ ]",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Line::from(spans)
}

fn render_board<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let state = app.game.state();
    let mut lines = vec![Line::from("")];
    for row in state.rows() {
        lines.push(board_line(&row));
        lines.push(Line::from(""));
    }

    match state.status() {
        GameStatus::Won => lines.push(Line::styled(
            format!("   Solved! The code was {}.", state.solution()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        GameStatus::Lost => lines.push(Line::styled(
            format!("   Ah, a shame. The correct code was {}!", state.solution()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        GameStatus::Playing => {}
    }

    if let Some(countdown) = app.countdown {
        lines.push(Line::from(vec![
            Span::raw("   Next airport in: "),
            Span::styled(countdown.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }

    let title = format!(
        " {} · {}/{} ",
        state.date(),
        state.guesses().len(),
        state.max_guesses()
    );
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

const fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        KeyState::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyState::Absent => Style::new().fg(Color::Gray).bg(Color::DarkGray),
        KeyState::Unused => Style::new().fg(Color::White),
    }
}

fn render_keyboard<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let keyboard = app.game.state().keyboard();
    let last = KEYBOARD_ROWS.len() - 1;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::styled("ENTER ", Style::default().fg(Color::Cyan)));
            }
            for letter in row.bytes() {
                spans.push(Span::styled(
                    format!(" {} ", letter as char),
                    key_style(keyboard.get(letter)),
                ));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(Span::styled("DEL", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(widget, area);
}

fn render_messages<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let help_text = if app.game.state().status().is_over() {
        "Esc: Quit | Come back tomorrow for a new airport"
    } else {
        "A-Z: Type | Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
