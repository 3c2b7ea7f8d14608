//! Cursor invariant: the cursor names an existing entry.

use super::Invariant;
use crate::{GameHistory, HistoryEntry};

/// Invariant: the cursor is inside the history and entry 0 is the empty
/// starting board.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.step < game.entries.len() && game.entries.first() == Some(&HistoryEntry::initial())
    }

    fn description() -> &'static str {
        "Cursor points into the history, which starts at the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = GameHistory::replay(&[Position::Center]).expect("legal moves");
        game.step = 2;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_missing_start_violates() {
        let mut game = GameHistory::replay(&[Position::Center]).expect("legal moves");
        game.entries.remove(0);
        game.step = 0;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
