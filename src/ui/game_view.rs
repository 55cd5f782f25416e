use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Die, GameState, PlayerProfile, Seat, COLS};

use super::board_widget;

/// Player colors by seat, shared by every view.
pub(super) const SEAT_COLORS: [Color; 2] = [Color::Cyan, Color::Red];

pub fn render(
    frame: &mut Frame,
    game: &GameState,
    players: &[PlayerProfile; 2],
    roll: Die,
    selected_column: usize,
    human_turn: bool,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(19),   // Boards
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, players, roll, chunks[0]);
    render_boards(frame, game, selected_column, human_turn, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game: &GameState,
    players: &[PlayerProfile; 2],
    roll: Die,
    area: ratatui::layout::Rect,
) {
    let seat = game.current_player();
    let scores = game.scores();

    let status = Line::from(vec![
        Span::styled(
            players[0].name.clone(),
            Style::default().fg(SEAT_COLORS[0]).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", scores[0])),
        Span::raw("  vs  "),
        Span::styled(
            players[1].name.clone(),
            Style::default().fg(SEAT_COLORS[1]).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", scores[1])),
        Span::raw("   |   "),
        Span::styled(
            format!("{} rolled ", players[seat.index()].name),
            Style::default().fg(SEAT_COLORS[seat.index()]),
        ),
        Span::styled(
            format!("{roll}"),
            Style::default()
                .fg(SEAT_COLORS[seat.index()])
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Knucklebones"));

    frame.render_widget(header, area);
}

fn render_boards(
    frame: &mut Frame,
    game: &GameState,
    selected_column: usize,
    human_turn: bool,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // The far player's board hangs upside down so both stacks grow toward
    // the middle, with the score rows meeting between them.
    lines.extend(board_widget::board_lines(
        game.board(Seat::Two),
        SEAT_COLORS[1],
        true,
    ));
    lines.push(board_widget::score_line(game.board(Seat::Two), SEAT_COLORS[1]));
    lines.push(Line::from(""));
    lines.push(board_widget::score_line(game.board(Seat::One), SEAT_COLORS[0]));
    lines.extend(board_widget::board_lines(
        game.board(Seat::One),
        SEAT_COLORS[0],
        false,
    ));

    if human_turn {
        lines.push(selector_line(selected_column));
        lines.push(column_number_line(selected_column));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn selector_line(selected_column: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for col in 0..COLS {
        let marker = if col == selected_column { "▲" } else { " " };
        spans.push(Span::styled(
            format!("{marker:^3}"),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn column_number_line(selected_column: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for col in 0..COLS {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::raw(label));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("1-3: Place  |  ←/→: Select  Enter: Drop  |  Esc: Menu")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
