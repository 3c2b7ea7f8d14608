//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use strictly_rewind::{DisplayOrder, GameHistory, MoveListItem, MoveOutcome, Position, move_list};
use tracing::{debug, instrument, warn};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

/// Main application state.
///
/// Every game change goes through the owned [`GameHistory`]. The rest of
/// the fields only describe what the screen shows.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    order: DisplayOrder,
    selected: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            order,
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Board square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current move-list order.
    pub fn order(&self) -> DisplayOrder {
        self.order
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last rejected action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list rows in display order.
    pub fn rows(&self) -> Vec<MoveListItem> {
        move_list(&self.game, self.order)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus, step = self.game.step()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('s') => self.toggle_order(),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.len() - 1),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.place(position);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last_row = self.game.len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last_row),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = self.rows().get(self.selected) {
                    self.jump(row.step);
                }
            }
            _ => {}
        }
    }

    fn place(&mut self, position: Position) {
        match self.game.apply_move(position) {
            MoveOutcome::Applied { .. } => {
                self.notice = None;
                self.select_current();
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                self.notice = Some(reason.to_string());
            }
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => {
                self.notice = None;
                self.select_current();
            }
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
        self.select_current();
    }

    fn toggle_order(&mut self) {
        let step = self.rows().get(self.selected).map(|row| row.step);
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move list order toggled");
        if let Some(step) = step {
            self.select_step(step);
        }
    }

    /// Points the list selection at the step in play.
    fn select_current(&mut self) {
        self.select_step(self.game.step());
    }

    fn select_step(&mut self, step: usize) {
        if let Some(row) = self.rows().iter().position(|row| row.step == step) {
            self.selected = row;
        }
    }
}
