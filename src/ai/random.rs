use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Die, GameState};

use super::agent::Agent;

/// The easy tier: selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible simulation runs.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState, _roll: Die) -> usize {
        let actions = state.legal_actions();
        assert!(!actions.is_empty(), "No open columns available");
        actions[self.rng.random_range(0..actions.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameOutcome;

    #[test]
    fn test_random_agent_selects_open_column() {
        let mut agent = RandomAgent::seeded(11);
        let state = GameState::initial();
        let legal = state.legal_actions();

        for _ in 0..100 {
            let roll = Die::new(3).unwrap();
            let column = agent.select_column(&state, roll);
            assert!(legal.contains(&column), "Column {} is not open", column);
        }
    }

    #[test]
    fn test_random_agents_play_a_full_match() {
        let mut agents = [RandomAgent::seeded(1), RandomAgent::seeded(2)];
        let mut dice = StdRng::seed_from_u64(7);
        let mut state = GameState::initial();

        let mut turns = 0;
        while !state.is_terminal() && turns < 10_000 {
            let roll = Die::roll(&mut dice);
            let seat = state.current_player();
            let column = agents[seat.index()].select_column(&state, roll);
            state.apply_move_mut(column, roll).unwrap();
            turns += 1;
        }

        assert!(state.is_terminal(), "Match should finish within the cap");
        assert!(matches!(
            state.outcome(),
            Some(GameOutcome::Winner(_)) | Some(GameOutcome::Draw)
        ));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
