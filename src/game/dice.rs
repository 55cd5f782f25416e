use std::fmt;

use rand::Rng;

/// A single die face, always in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die(u8);

impl Die {
    pub const FACES: u8 = 6;

    /// Create a die from a face value, rejecting anything outside 1..=6.
    pub fn new(value: u8) -> Option<Die> {
        (1..=Self::FACES).contains(&value).then_some(Die(value))
    }

    /// Roll a uniformly random face.
    pub fn roll<R: Rng>(rng: &mut R) -> Die {
        Die(rng.random_range(1..=Self::FACES))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_accepts_valid_faces() {
        for value in 1..=6 {
            assert_eq!(Die::new(value).map(Die::value), Some(value));
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Die::new(0), None);
        assert_eq!(Die::new(7), None);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let die = Die::roll(&mut rng);
            assert!((1..=6).contains(&die.value()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Die::new(4).unwrap().to_string(), "4");
    }
}
