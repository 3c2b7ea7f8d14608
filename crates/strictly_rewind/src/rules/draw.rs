//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::X));
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        use Square::Occupied as Occ;
        // X O X / O X X / O X O
        let board = Board::from_squares([
            Occ(X), Occ(O), Occ(X),
            Occ(O), Occ(X), Occ(X),
            Occ(O), Occ(X), Occ(O),
        ]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        use Square::Occupied as Occ;
        // Full board where X holds the top row.
        let board = Board::from_squares([
            Occ(X), Occ(X), Occ(X),
            Occ(O), Occ(O), Occ(X),
            Occ(X), Occ(O), Occ(O),
        ]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
