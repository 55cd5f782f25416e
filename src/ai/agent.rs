use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::{Die, GameState};

use super::greedy::GreedyAgent;
use super::random::RandomAgent;
use super::saboteur::SaboteurAgent;

/// Column-selection policy strength for a computer opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Build the agent implementing this tier's policy.
    pub fn agent(self) -> Box<dyn Agent> {
        match self {
            Difficulty::Easy => Box::new(RandomAgent::new()),
            Difficulty::Medium => Box::new(GreedyAgent),
            Difficulty::Hard => Box::new(SaboteurAgent),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected easy, medium, or hard)"
            )),
        }
    }
}

/// Universal interface for the computer opponents.
///
/// Implementations only ever return open columns; callers apply the chosen
/// move without re-validating it.
pub trait Agent {
    /// Select a column for the rolled die given the current match state.
    fn select_column(&mut self, state: &GameState, roll: Die) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trips_through_strings() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_difficulty_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_factory_builds_each_tier() {
        assert_eq!(Difficulty::Easy.agent().name(), "Random");
        assert_eq!(Difficulty::Medium.agent().name(), "Greedy");
        assert_eq!(Difficulty::Hard.agent().name(), "Saboteur");
    }
}
