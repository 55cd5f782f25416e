use crate::game::{Board, Die, GameState};

use super::agent::Agent;
use super::greedy::placement_score;

/// The hard tier: adds what the knockout would cost the opponent to the
/// greedy self-score, so a column counts double when the roll both scores
/// well and wrecks the opponent's matching column. Same lowest-index
/// tie-break as the greedy tier.
pub struct SaboteurAgent;

/// Column score the opponent loses if every die equal to `die` is knocked
/// out of their column `col`, simulated on a scratch copy.
fn knockout_loss(board: &Board, col: usize, die: Die) -> u32 {
    let before = board.column_scores()[col];
    let mut scratch = *board;
    scratch.remove_matching(col, die);
    before - scratch.column_scores()[col]
}

impl Agent for SaboteurAgent {
    fn select_column(&mut self, state: &GameState, roll: Die) -> usize {
        let actions = state.legal_actions();
        assert!(!actions.is_empty(), "No open columns available");

        let own = state.board(state.current_player());
        let opponent = state.board(state.current_player().other());

        let value = |col: usize| placement_score(own, col, roll) + knockout_loss(opponent, col, roll);

        let mut best_column = actions[0];
        let mut best_value = value(best_column);
        for &col in &actions[1..] {
            let candidate = value(col);
            if candidate > best_value {
                best_value = candidate;
                best_column = col;
            }
        }

        best_column
    }

    fn name(&self) -> &str {
        "Saboteur"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{GameOutcome, Seat};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn die(value: u8) -> Die {
        Die::new(value).unwrap()
    }

    fn board_with(placements: &[(usize, u8)]) -> Board {
        let mut board = Board::new();
        for &(col, face) in placements {
            board.place(col, die(face)).unwrap();
        }
        board
    }

    #[test]
    fn test_mirrored_pair_doubles_up_on_the_same_column() {
        // Both boards hold [1,1,_] in column 1; rolling a 1 there scores 9
        // for us and erases 4 from the opponent
        let own = board_with(&[(1, 1), (1, 1)]);
        let opponent = board_with(&[(1, 1), (1, 1)]);
        let state = GameState::with_boards([own, opponent], Seat::One);

        let mut agent = SaboteurAgent;
        assert_eq!(agent.select_column(&state, die(1)), 1);
    }

    #[test]
    fn test_pure_denial_when_own_gains_are_flat() {
        // Own board empty, so every column gains 5; only column 2 also costs
        // the opponent their pair of 5s (20 points)
        let opponent = board_with(&[(2, 5), (2, 5)]);
        let state = GameState::with_boards([Board::new(), opponent], Seat::One);

        let mut agent = SaboteurAgent;
        assert_eq!(agent.select_column(&state, die(5)), 2);
    }

    #[test]
    fn test_own_score_outweighs_a_small_knockout() {
        // Pairing a 6 in column 0 gains 24; knocking a lone 1 out of the
        // opponent's column 1 is only worth 1 + 1
        let own = board_with(&[(0, 6)]);
        let opponent = board_with(&[(1, 1)]);
        let state = GameState::with_boards([own, opponent], Seat::One);

        let mut agent = SaboteurAgent;
        assert_eq!(agent.select_column(&state, die(6)), 0);
    }

    #[test]
    fn test_ties_resolve_to_lowest_column() {
        let state = GameState::initial();
        let mut agent = SaboteurAgent;
        assert_eq!(agent.select_column(&state, die(2)), 0);
    }

    #[test]
    fn test_beats_random_agent() {
        let games_per_side = 150;
        let mut saboteur_wins = 0;
        let total = games_per_side * 2;
        let mut dice = StdRng::seed_from_u64(4242);

        for game in 0..total {
            let saboteur_seat = if game % 2 == 0 { Seat::One } else { Seat::Two };
            let mut saboteur = SaboteurAgent;
            let mut random = RandomAgent::seeded(game as u64);
            let mut state = GameState::initial();

            let mut turns = 0;
            while !state.is_terminal() && turns < 10_000 {
                let roll = Die::roll(&mut dice);
                let column = if state.current_player() == saboteur_seat {
                    saboteur.select_column(&state, roll)
                } else {
                    random.select_column(&state, roll)
                };
                state.apply_move_mut(column, roll).unwrap();
                turns += 1;
            }

            if state.outcome() == Some(GameOutcome::Winner(saboteur_seat)) {
                saboteur_wins += 1;
            }
        }

        let win_rate = saboteur_wins as f64 / total as f64;
        assert!(
            win_rate > 0.60,
            "Saboteur should beat random well above parity, got {:.0}% ({saboteur_wins}/{total})",
            win_rate * 100.0
        );
    }

    #[test]
    fn test_name_is_saboteur() {
        assert_eq!(SaboteurAgent.name(), "Saboteur");
    }
}
