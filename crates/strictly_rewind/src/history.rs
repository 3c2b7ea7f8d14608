//! Branching move history with a movable cursor.
//!
//! A [`GameHistory`] keeps every board snapshot of the game in order, plus a
//! cursor (the step) naming the snapshot currently in play. Jumping the
//! cursor back is free and keeps the later snapshots around; the first move
//! made from a rewound step throws those later snapshots away and starts a
//! new branch.

use super::action::{IllegalMove, MoveOutcome};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::{Board, GameStatus, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// The game as it stood after one move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) last_move: Option<Position>,
}

impl HistoryEntry {
    /// The empty board before any move.
    pub(crate) fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Board snapshot after the move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square that produced this entry, `None` for the starting board.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

/// Raw description of a history step, for move lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveDescriptor {
    /// Step 0, the empty board.
    Start,
    /// A move made into history entry `step`.
    Move {
        /// Move number, starting at 1.
        step: usize,
        /// Who made the move.
        player: Player,
        /// Where the mark went.
        position: Position,
        /// Zero-based row of `position`.
        row: usize,
        /// Zero-based column of `position`.
        col: usize,
    },
}

/// Errors from cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// Requested step does not exist.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

/// Game session: all board snapshots plus the cursor into them.
///
/// Whose turn it is is never stored. X moves on even steps and O on odd
/// ones, so the turn always agrees with the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) entries: Vec<HistoryEntry>,
    pub(crate) step: usize,
}

impl GameHistory {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
            step: 0,
        }
    }

    /// Plays `moves` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first move that would have been ignored.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, IllegalMove> {
        let mut game = Self::new();
        for position in moves {
            if let MoveOutcome::Ignored(reason) = game.apply_move(*position) {
                return Err(reason);
            }
        }
        Ok(game)
    }

    /// Index of the entry currently in play.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of entries, including the starting board.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at `step`, if it exists.
    pub fn entry(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Entry the cursor points at.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.step]
    }

    /// Board the cursor points at.
    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    /// True when the cursor is on the newest entry.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.entries.len()
    }

    /// Player whose turn it is at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Status of the board at the cursor.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = board.winner() {
            GameStatus::Winner(winner)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Turn(self.to_move())
        }
    }

    /// Squares that would accept a move right now.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_board().winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// Checks whether a move at `position` would be applied.
    ///
    /// # Errors
    ///
    /// Returns the reason [`apply_move`](Self::apply_move) would ignore it.
    pub fn check_move(&self, position: Position) -> Result<(), IllegalMove> {
        MoveContract::pre(self, &position)
    }

    /// Places the current player's mark at `position`.
    ///
    /// Illegal moves are ignored and reported in the outcome. A legal move
    /// made after [`jump_to`](Self::jump_to) rewound the cursor discards
    /// every entry after the cursor before the new one is appended.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if let Err(reason) = LegalMove::check(self, position) {
            debug!(%reason, "Ignoring illegal move");
            return MoveOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let board = self.current_board().with_mark(position, player);

        self.truncate(self.step + 1);
        self.entries.push(HistoryEntry {
            board,
            last_move: Some(position),
        });
        self.step = self.entries.len() - 1;

        info!(new_step = self.step, %position, board = %self.current_board(), "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            warn!(?violations, "Move postcondition failed");
            panic!("move postcondition failed: {:?}", violations);
        }

        MoveOutcome::Applied {
            step: self.step,
            player,
        }
    }

    /// Places a mark by raw board index (0-8).
    ///
    /// An index off the board is ignored like any other illegal move.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.apply_move(position),
            None => {
                debug!(index, "Ignoring move off the board");
                MoveOutcome::Ignored(IllegalMove::OutOfBounds(index))
            }
        }
    }

    /// Moves the cursor to `step` without discarding anything.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no entry exists at
    /// `step`. The cursor is left where it was.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.entries.len();
        if step >= len {
            warn!(step, len, "Rejected jump outside history");
            return Err(HistoryError::StepOutOfRange { step, len });
        }
        self.step = step;
        debug!(to = step, "Cursor moved");
        Ok(())
    }

    /// Describes the move that produced entry `step`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no entry exists at `step`.
    pub fn move_descriptor(&self, step: usize) -> Result<MoveDescriptor, HistoryError> {
        let entry = self.entry(step).ok_or(HistoryError::StepOutOfRange {
            step,
            len: self.entries.len(),
        })?;
        Ok(match entry.last_move {
            None => MoveDescriptor::Start,
            Some(position) => MoveDescriptor::Move {
                step,
                player: Player::for_step(step - 1),
                position,
                row: position.row(),
                col: position.col(),
            },
        })
    }

    /// Drops every entry from index `len` on.
    ///
    /// Only [`apply_move`](Self::apply_move) calls this.
    fn truncate(&mut self, len: usize) {
        let discarded = self.entries.len().saturating_sub(len);
        if discarded > 0 {
            info!(discarded, kept = len, "Branching: discarding rewound moves");
        }
        self.entries.truncate(len);
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_empty() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.current().last_move(), None);
        assert_eq!(game.status(), GameStatus::Turn(Player::X));
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let mut game = GameHistory::new();
        let outcome = game.apply_move(Position::Center);

        assert_eq!(outcome, MoveOutcome::Applied { step: 1, player: Player::X });
        assert_eq!(game.len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.current().last_move(), Some(Position::Center));
        assert_eq!(game.to_move(), Player::O);
        // Entry 0 is still the empty board.
        assert_eq!(game.entries()[0].board(), &Board::new());
    }

    #[test]
    fn test_apply_index_off_board_is_ignored() {
        let mut game = GameHistory::new();
        let outcome = game.apply_index(9);

        assert_eq!(outcome, MoveOutcome::Ignored(IllegalMove::OutOfBounds(9)));
        assert_eq!(game, GameHistory::new());
    }

    #[test]
    fn test_jump_back_keeps_future() {
        let mut game =
            GameHistory::replay(&[Position::TopLeft, Position::Center, Position::BottomRight])
                .expect("legal moves");

        game.jump_to(1).expect("step exists");
        assert_eq!(game.len(), 4);
        assert!(!game.is_latest());
        assert_eq!(game.to_move(), Player::O);

        game.jump_to(3).expect("step exists");
        assert!(game.is_latest());
    }

    #[test]
    fn test_truncate_only_discards_past_cursor() {
        let mut game =
            GameHistory::replay(&[Position::TopLeft, Position::Center]).expect("legal moves");
        game.step = 0;
        game.truncate(1);
        assert_eq!(game.len(), 1);
        assert_eq!(game.current_board(), &Board::new());
    }

    #[test]
    fn test_move_descriptor_rows_and_columns() {
        let game =
            GameHistory::replay(&[Position::MiddleRight, Position::BottomLeft]).expect("legal moves");

        assert_eq!(game.move_descriptor(0), Ok(MoveDescriptor::Start));
        assert_eq!(
            game.move_descriptor(1),
            Ok(MoveDescriptor::Move {
                step: 1,
                player: Player::X,
                position: Position::MiddleRight,
                row: 1,
                col: 2,
            })
        );
        assert_eq!(
            game.move_descriptor(2),
            Ok(MoveDescriptor::Move {
                step: 2,
                player: Player::O,
                position: Position::BottomLeft,
                row: 2,
                col: 0,
            })
        );
        assert_eq!(
            game.move_descriptor(3),
            Err(HistoryError::StepOutOfRange { step: 3, len: 3 })
        );
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let game = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ])
        .expect("legal moves");

        assert!(game.valid_moves().is_empty());
        assert_eq!(
            game.check_move(Position::BottomRight),
            Err(IllegalMove::GameOver(Player::X))
        );
    }

    #[test]
    fn test_replay_reports_first_illegal_move() {
        let result = GameHistory::replay(&[Position::Center, Position::Center]);
        assert_eq!(result, Err(IllegalMove::SquareOccupied(Position::Center)));
    }
}
