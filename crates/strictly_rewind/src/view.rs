//! Read-only move list projection for presentation layers.

use super::history::{GameHistory, MoveDescriptor};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which a move list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of a move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    /// History step this row jumps to.
    pub step: usize,
    /// What happened at that step.
    pub descriptor: MoveDescriptor,
    /// True for the step the cursor is on.
    pub is_current: bool,
}

/// Lists every history step in the requested order.
///
/// Reversing only affects the returned rows; the history is untouched.
#[instrument(skip(game), fields(len = game.len()))]
pub fn move_list(game: &GameHistory, order: DisplayOrder) -> Vec<MoveListItem> {
    let mut items: Vec<MoveListItem> = (0..game.len())
        .filter_map(|step| {
            game.move_descriptor(step).ok().map(|descriptor| MoveListItem {
                step,
                descriptor,
                is_current: step == game.step(),
            })
        })
        .collect();

    if order == DisplayOrder::Descending {
        items.reverse();
    }
    items
}
