//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: usize = 3;
/// Number of columns on the board.
pub const COLS: usize = 3;
/// Number of squares on the board.
pub const CELLS: usize = ROWS * COLS;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is at `step` of a game.
    ///
    /// Step 0 is the empty board, so X moves on even steps.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Immutable 3x3 board snapshot.
///
/// There is no in-place setter. Placing a mark yields a new board via
/// [`Board::with_mark`], so every snapshot kept in a history stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    #[must_use]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Counts the squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Counts the occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        super::rules::check_winner(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.squares.chunks(COLS).enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            for square in chunk {
                let symbol = match square {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// What the current board means for the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Three in a row for this player.
    Winner(Player),
    /// Game is ongoing and this player moves next.
    Turn(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game cannot accept more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Turn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);

        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_player_for_step() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(8), Player::X);
    }

    #[test]
    fn test_display_rows() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::BottomRight, Player::O);
        assert_eq!(board.to_string(), "X../.../..O");
    }

    #[test]
    fn test_count_by_player() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_status_serialized_shape() {
        let won = serde_json::to_string(&GameStatus::Winner(Player::X)).unwrap();
        let turn = serde_json::to_string(&GameStatus::Turn(Player::O)).unwrap();
        let draw = serde_json::to_string(&GameStatus::Draw).unwrap();

        assert_eq!(won, r#"{"Winner":"X"}"#);
        assert_eq!(turn, r#"{"Turn":"O"}"#);
        assert_eq!(draw, r#""Draw""#);
    }
}
