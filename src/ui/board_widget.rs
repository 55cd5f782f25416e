use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::game::{Board, COLS, ROWS};

const TOP_BORDER: &str = "╭───┬───┬───╮";
const MID_BORDER: &str = "├───┼───┼───┤";
const BOTTOM_BORDER: &str = "╰───┴───┴───╯";

/// Build the grid of one board as styled lines, borders in the player's
/// color. With `reversed` set the rows come out mirrored top to bottom, used
/// for the far player's board so the two grids meet in the middle of the
/// match screen.
pub fn board_lines(board: &Board, color: Color, reversed: bool) -> Vec<Line<'static>> {
    let border = Style::default().fg(color);
    let mut lines = Vec::with_capacity(2 * ROWS + 1);

    let mut order: Vec<usize> = (0..ROWS).collect();
    if reversed {
        order.reverse();
    }

    lines.push(Line::from(Span::styled(TOP_BORDER, border)));
    for (i, &row) in order.iter().enumerate() {
        let mut spans = Vec::with_capacity(2 * COLS + 1);
        spans.push(Span::styled("│", border));
        for col in 0..COLS {
            spans.push(match board.get(col, row) {
                Some(die) => Span::styled(
                    format!(" {die} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            });
            spans.push(Span::styled("│", border));
        }
        lines.push(Line::from(spans));

        if i < ROWS - 1 {
            lines.push(Line::from(Span::styled(MID_BORDER, border)));
        }
    }
    lines.push(Line::from(Span::styled(BOTTOM_BORDER, border)));

    lines
}

/// One line of per-column scores, aligned under the board's columns.
pub fn score_line(board: &Board, color: Color) -> Line<'static> {
    let scores = board.column_scores();
    Line::from(Span::styled(
        format!(" {:^3} {:^3} {:^3} ", scores[0], scores[1], scores[2]),
        Style::default().fg(color),
    ))
}
