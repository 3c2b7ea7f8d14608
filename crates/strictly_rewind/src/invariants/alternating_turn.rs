//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameHistory, Player, Square};

/// Invariant: players alternate turns, X first.
///
/// The mark added in entry `k` belongs to X when `k` is odd and to O when
/// it is even. Every board therefore has as many X marks as O marks, or
/// one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(game: &GameHistory) -> bool {
        let marks_alternate = game.entries.iter().enumerate().skip(1).all(|(step, entry)| {
            entry.last_move.is_some_and(|position| {
                entry.board.get(position) == Square::Occupied(Player::for_step(step - 1))
            })
        });

        let counts_balanced = game.entries.iter().all(|entry| {
            let x = entry.board.count(Player::X);
            let o = entry.board.count(Player::O);
            x == o || x == o + 1
        });

        marks_alternate && counts_balanced
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameHistory::replay(&[Position::TopLeft]).expect("legal moves");
        // X plays twice.
        game.entries.push(HistoryEntry {
            board: game.entries[1].board.with_mark(Position::Center, Player::X),
            last_move: Some(Position::Center),
        });
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut game = GameHistory::new();
        game.entries.push(HistoryEntry {
            board: Board::new().with_mark(Position::Center, Player::O),
            last_move: Some(Position::Center),
        });
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
