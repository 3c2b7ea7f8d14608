//! Key to board-position translation.

use crossterm::event::KeyCode;
use strictly_rewind::Position;

/// Moves the board cursor one square with the arrow keys.
///
/// The cursor stops at the board edge; other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_coords(r, c))
        .unwrap_or(cursor)
}

/// Maps the digit keys 1-9 onto squares in reading order.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}
