//! Strictly Rewind - tic-tac-toe with time travel
//!
//! Pure game core: no I/O, no rendering. A presentation layer owns a
//! [`GameHistory`], feeds it moves and cursor jumps, and renders what it
//! reads back.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a single [`Board`]
//! - **History**: every board snapshot plus the cursor, with branch
//!   truncation when a move is made from a rewound step
//! - **Invariants / Contracts**: properties checked after every move in
//!   debug builds
//! - **View**: move list projection in either [`DisplayOrder`]
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameHistory, GameStatus, Player, Position};
//!
//! let mut game = GameHistory::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//!
//! // Rewind one move and play somewhere else: the old move 2 is gone.
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.len(), 3);
//! assert_eq!(game.status(), GameStatus::Turn(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{IllegalMove, MoveOutcome};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use history::{GameHistory, HistoryEntry, HistoryError, MoveDescriptor};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, LegalSuccessionInvariant,
};
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, COLS, CELLS, GameStatus, Player, ROWS, Square};
pub use view::{DisplayOrder, MoveListItem, move_list};
