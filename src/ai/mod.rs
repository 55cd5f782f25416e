//! The computer opponents: a shared [`Agent`] interface and one
//! column-selection policy per difficulty tier.

mod agent;
mod greedy;
mod random;
mod saboteur;

pub use agent::{Agent, Difficulty};
pub use greedy::GreedyAgent;
pub use random::RandomAgent;
pub use saboteur::SaboteurAgent;
