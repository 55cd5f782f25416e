use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ai::Difficulty;
use crate::game::{GameOutcome, PlayerProfile};

use super::game_view::SEAT_COLORS;

/// The main menu with one entry per game mode.
pub fn render_menu(frame: &mut Frame, selected: usize) {
    let entries = ["[1] Play vs Human", "[2] Play vs AI", "[3] Quit"];
    let lines = option_lines(&entries, selected);
    render_panel(frame, "Knucklebones", lines);
}

/// Prompt for one player name; `buffer` is what has been typed so far.
pub fn render_name_entry(frame: &mut Frame, prompt: &str, buffer: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(prompt.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(buffer.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Confirm  |  Esc: Back",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_panel(frame, "Knucklebones", lines);
}

/// The difficulty sub-prompt shown before a match against the AI.
pub fn render_difficulty(frame: &mut Frame, selected: usize, default: Difficulty) {
    let entries: Vec<String> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, difficulty)| {
            let marker = if *difficulty == default { " (default)" } else { "" };
            format!("[{}] {}{}", i + 1, capitalized(*difficulty), marker)
        })
        .collect();
    let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
    let lines = option_lines(&refs, selected);
    render_panel(frame, "Choose AI difficulty", lines);
}

/// The end-of-match panel: score table, winner, and the way back.
pub fn render_results(
    frame: &mut Frame,
    players: &[PlayerProfile; 2],
    scores: [u32; 2],
    outcome: GameOutcome,
) {
    let mut lines = vec![Line::from("")];

    for (i, player) in players.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", player.name),
                Style::default().fg(SEAT_COLORS[i]),
            ),
            Span::styled(
                format!("{:>4}", scores[i]),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(match outcome {
        GameOutcome::Winner(seat) => Line::from(Span::styled(
            format!("🏆 {} wins!", players[seat.index()].name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        GameOutcome::Draw => Line::from(Span::styled(
            "It's a draw!",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    });
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to return to the main menu",
        Style::default().fg(Color::DarkGray),
    )));

    render_panel(frame, "Game Results", lines);
}

fn option_lines(entries: &[&str], selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (i, entry) in entries.iter().enumerate() {
        if i == selected {
            lines.push(Line::from(Span::styled(
                format!("▸ {entry}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {entry}")));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn render_panel(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>) {
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(panel, frame.area());
}

fn capitalized(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}
