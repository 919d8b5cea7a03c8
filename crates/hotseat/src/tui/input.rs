//! Mapping terminal events to front-end actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use hotseat_tictactoe::{InputEvent, Position};

use super::layout::{Hit, ScreenLayout};

/// Direction for keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the front end should do in response to a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the game controller.
    Game(InputEvent),
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Select the cell under the keyboard cursor.
    SelectCursor,
    /// Leave the application.
    Quit,
}

/// Translates a terminal event into an action, if it means anything.
///
/// Mouse clicks are resolved against `layout`, the geometry of the frame
/// currently on screen.
pub fn map_event(event: &Event, layout: &ScreenLayout) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, layout),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    // Crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Game(InputEvent::ResetRequested)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Game(InputEvent::CellSelected(digit as usize - 1))),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    // Clicks register on release, like a button.
    if mouse.kind != MouseEventKind::Up(MouseButton::Left) {
        return None;
    }

    match layout.hit_test(mouse.column, mouse.row)? {
        Hit::Cell(pos) => Some(Action::Game(InputEvent::CellSelected(pos.to_index()))),
        Hit::Reset => Some(Action::Game(InputEvent::ResetRequested)),
    }
}

/// Moves cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
