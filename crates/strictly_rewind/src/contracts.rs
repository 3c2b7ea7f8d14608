//! Contract-based validation for history transitions.
//!
//! Contracts formalize the Hoare-style reasoning {P} action {Q}: a
//! precondition decides whether a move is legal, a postcondition checks
//! that the history is still well formed afterwards.

use super::action::IllegalMove;
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Why the action may not be applied.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board at the cursor has no winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once someone has three in a row.
    #[instrument(skip(game))]
    pub fn check(game: &GameHistory) -> Result<(), IllegalMove> {
        match game.current_board().winner() {
            Some(winner) => Err(IllegalMove::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(game: &GameHistory, position: Position) -> Result<(), IllegalMove> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(IllegalMove::SquareOccupied(position))
        }
    }
}

/// Composite precondition, checked in order: game not over, square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(game: &GameHistory, position: Position) -> Result<(), IllegalMove> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(game, position)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameHistory::apply_move`].
///
/// Postconditions:
/// - entries up to the old cursor are untouched
/// - exactly one entry follows them and the cursor points at it
/// - every [`HistoryInvariants`] member holds
pub struct MoveContract;

impl Contract<GameHistory, Position> for MoveContract {
    type Rejection = IllegalMove;

    fn pre(game: &GameHistory, position: &Position) -> Result<(), IllegalMove> {
        LegalMove::check(game, *position)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let kept = before.step() + 1;
        if after.entries().get(..kept) != before.entries().get(..kept) {
            violations.push(InvariantViolation::new(
                "Entries up to the cursor survive a move",
            ));
        }
        if after.len() != kept + 1 || after.step() != kept {
            violations.push(InvariantViolation::new(
                "A move appends exactly one entry after the cursor and selects it",
            ));
        }
        if let Err(mut found) = HistoryInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
