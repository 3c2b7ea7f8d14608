//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Every line that wins the game, in the order they are checked:
/// rows top to bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the player holding all three squares of the first complete
/// line in [`LINES`], `None` otherwise.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = board.get(*a);
        if sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c) {
            sq.player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, *player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::TopLeft, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos, player)));
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            }
        }
    }
}
