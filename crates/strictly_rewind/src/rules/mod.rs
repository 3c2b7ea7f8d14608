//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They know nothing about
//! history or turn order, which lets [`GameHistory`](crate::GameHistory) and
//! the invariants share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
