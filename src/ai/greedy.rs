use crate::game::{Board, Die, GameState};

use super::agent::Agent;

/// The medium tier: places the roll where its own column score comes out
/// highest, without looking at the opponent's board. Ties go to the lowest
/// column index, a stable scan rather than a random break.
pub struct GreedyAgent;

/// Score of column `col` after dropping `die` there, simulated on a scratch
/// copy so the live board is never touched.
pub(super) fn placement_score(board: &Board, col: usize, die: Die) -> u32 {
    let mut scratch = *board;
    if scratch.place(col, die).is_err() {
        return 0;
    }
    scratch.column_scores()[col]
}

impl Agent for GreedyAgent {
    fn select_column(&mut self, state: &GameState, roll: Die) -> usize {
        let actions = state.legal_actions();
        assert!(!actions.is_empty(), "No open columns available");

        let board = state.board(state.current_player());

        let mut best_column = actions[0];
        let mut best_score = placement_score(board, best_column, roll);
        for &col in &actions[1..] {
            let score = placement_score(board, col, roll);
            if score > best_score {
                best_score = score;
                best_column = col;
            }
        }

        best_column
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
