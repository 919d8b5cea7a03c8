//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! The layout is a pure function of the terminal area. The event loop keeps
//! the layout of the last drawn frame, so a click is resolved against the
//! exact rectangles the player saw.

use hotseat_tictactoe::{CELL_COUNT, Position};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width: three cells plus two divider columns.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height: three cells plus two divider rows.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const RESET_WIDTH: u16 = 11;

/// What a screen coordinate points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// One of the nine cells.
    Cell(Position),
    /// The reset button.
    Reset,
}

/// Rectangles for every interactive and decorative region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title and status message.
    pub header: Rect,
    /// Whole grid, dividers included.
    pub board: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; CELL_COUNT],
    /// Reset button.
    pub reset_button: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal area.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
        });

        Self {
            header: chunks[0],
            board,
            cells,
            reset_button: center_rect(chunks[2], RESET_WIDTH, FOOTER_HEIGHT),
            help: chunks[3],
        }
    }

    /// Resolves a terminal coordinate to the region under it.
    ///
    /// Dividers and empty space resolve to `None`.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        if contains(self.reset_button, column, row) {
            return Some(Hit::Reset);
        }
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
            .map(Hit::Cell)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Centers a `width` x `height` rectangle inside `area`, shrinking it to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
