use super::board::{self, Board, COLS};
use super::dice::Die;
use super::player::Seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// The full state of one match: both boards, whose turn it is, and the
/// outcome once the match has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    boards: [Board; 2],
    current: Seat,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            boards: [Board::new(); 2],
            current: Seat::One, // Seat One opens
            outcome: None,
        }
    }

    /// Get current seat
    pub fn current_player(&self) -> Seat {
        self.current
    }

    /// Get reference to a seat's board
    pub fn board(&self, seat: Seat) -> &Board {
        &self.boards[seat.index()]
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Both total scores, indexed by seat
    pub fn scores(&self) -> [u32; 2] {
        [self.boards[0].total_score(), self.boards[1].total_score()]
    }

    /// Open columns on the current player's board
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.boards[self.current.index()].is_column_full(col))
            .collect()
    }

    /// Apply a full turn and return the new state (immutable)
    pub fn apply_move(&self, column: usize, roll: Die) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column, roll)?;
        Ok(next)
    }

    /// Apply a full turn in place: place the rolled die on the current
    /// board, knock the same face out of the opponent's matching column,
    /// check whether the mover just filled their board, then pass the turn.
    pub fn apply_move_mut(&mut self, column: usize, roll: Die) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current.index();
        let other = self.current.other().index();

        self.boards[mover].place(column, roll).map_err(|e| match e {
            board::MoveError::ColumnFull => MoveError::ColumnFull,
            board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        })?;

        // Knockout: landing a die destroys every die of the same face in the
        // opponent's column of the same index.
        self.boards[other].remove_matching(column, roll);

        // The match ends the moment the mover's board is full. Equal totals
        // are an explicit draw, never a default winner.
        if self.boards[mover].is_full() {
            let own = self.boards[mover].total_score();
            let theirs = self.boards[other].total_score();
            self.outcome = Some(if own > theirs {
                GameOutcome::Winner(self.current)
            } else if theirs > own {
                GameOutcome::Winner(self.current.other())
            } else {
                GameOutcome::Draw
            });
        }

        self.current = self.current.other();

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_boards(boards: [Board; 2], current: Seat) -> Self {
        GameState {
            boards,
            current,
            outcome: None,
        }
    }
}
