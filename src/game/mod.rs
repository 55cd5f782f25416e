//! Core Knucklebones rules: dice, board representation, player identities,
//! and the turn state machine with immutable transitions.

mod board;
mod dice;
mod player;
mod state;

pub use board::{Board, COLS, ROWS};
pub use dice::Die;
pub use player::{PlayerKind, PlayerProfile, Seat};
pub use state::{GameOutcome, GameState, MoveError};
