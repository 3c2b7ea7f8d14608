//! Outcome of attempting a move.

use super::{Player, Position};

/// Why a move was not applied.
///
/// [`GameHistory::apply_move`](crate::GameHistory::apply_move) never returns
/// this as an error. Illegal moves leave the game untouched, the same way a
/// disabled button would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The current board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A raw cell index that names no square.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for IllegalMove {}

/// Result of an attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as history entry `step`.
    Applied {
        /// Index of the new history entry.
        step: usize,
        /// Who moved.
        player: Player,
    },
    /// Nothing changed.
    Ignored(IllegalMove),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}
