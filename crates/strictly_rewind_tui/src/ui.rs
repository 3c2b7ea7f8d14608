//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_rewind::{Board, COLS, GameStatus, MoveDescriptor, Player, Position, ROWS, Square};

use crate::app::{App, Focus};

/// Status line text, e.g. `Next player: X`.
pub fn status_text(status: GameStatus) -> String {
    match status {
        GameStatus::Winner(player) => format!("Winner: {}", player),
        GameStatus::Turn(player) => format!("Next player: {}", player),
        GameStatus::Draw => "Draw".to_string(),
    }
}

/// Move list label, e.g. `Go to move #3 (0, 2)`.
pub fn describe(descriptor: MoveDescriptor) -> String {
    match descriptor {
        MoveDescriptor::Start => "Go to game start".to_string(),
        MoveDescriptor::Move { step, row, col, .. } => {
            format!("Go to move #{} ({}, {})", step, row, col)
        }
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + move list
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let status = match app.notice() {
        Some(notice) => format!("{}  ({})", status_text(app.game().status()), notice),
        None => status_text(app.game().status()),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "arrows: move  enter: play/jump  1-9: play  tab: switch pane  s: sort  home/end  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Board;
    let block = Block::default()
        .title(format!("Board (step {})", app.game().step()))
        .borders(Borders::ALL)
        .border_style(focus_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let cursor = focused.then_some(app.cursor());
    let last_move = app.game().current().last_move();
    let board = app.game().current_board();
    for row in 0..ROWS {
        draw_row(frame, rows[row * 2], board, row, cursor, last_move);
        if row + 1 < ROWS {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    row: usize,
    cursor: Option<Position>,
    last_move: Option<Position>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..COLS {
        if let Some(pos) = Position::from_coords(row, col) {
            draw_cell(frame, cols[col * 2], board, pos, cursor, last_move);
        }
        if col + 1 < COLS {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    cursor: Option<Position>,
    last_move: Option<Position>,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = base_style;
    if last_move == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Middle line of the three-line cell.
    let text = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let rows = app.rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let style = if row.is_current {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(describe(row.descriptor), style)))
        })
        .collect();

    let title = format!(
        "Moves ({}) - s: {}",
        app.order().label(),
        app.order().toggle().label()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
