//! Succession invariant: each entry is one legal move after the previous.

use super::Invariant;
use crate::{GameHistory, Square};

/// Invariant: entry `n` is entry `n - 1` plus exactly one mark.
///
/// The mark sits on the entry's `last_move` square, which was empty
/// before, and the previous board had no winner.
pub struct LegalSuccessionInvariant;

impl Invariant<GameHistory> for LegalSuccessionInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.entries.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(position) = next.last_move else {
                return false;
            };
            if prev.board.winner().is_some() || !prev.board.is_empty(position) {
                return false;
            }
            match next.board.get(position) {
                Square::Occupied(player) => next.board == prev.board.with_mark(position, player),
                Square::Empty => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each entry follows the previous one by a single legal move"
    }
}
