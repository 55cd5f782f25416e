use crate::ai::Difficulty;

/// One of the two sides of a match. Boards in [`super::GameState`] are
/// indexed by seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index into per-seat pairs (boards, profiles, scores)
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// How a player's moves are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Ai(Difficulty),
}

/// A player's identity for the duration of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub name: String,
    pub kind: PlayerKind,
}

impl PlayerProfile {
    pub fn human(name: impl Into<String>) -> Self {
        PlayerProfile {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn ai(name: impl Into<String>, difficulty: Difficulty) -> Self {
        PlayerProfile {
            name: name.into(),
            kind: PlayerKind::Ai(difficulty),
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self.kind, PlayerKind::Ai(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::One.other(), Seat::Two);
        assert_eq!(Seat::Two.other(), Seat::One);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::One.index(), 0);
        assert_eq!(Seat::Two.index(), 1);
    }

    #[test]
    fn test_profile_kinds() {
        let human = PlayerProfile::human("Alice");
        assert_eq!(human.name, "Alice");
        assert!(!human.is_ai());

        let ai = PlayerProfile::ai("Greta", Difficulty::Hard);
        assert_eq!(ai.kind, PlayerKind::Ai(Difficulty::Hard));
        assert!(ai.is_ai());
    }
}
