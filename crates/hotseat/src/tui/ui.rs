//! Stateless UI rendering for the game screen.

use hotseat_tictactoe::{Cell, Player, Position, StatusMessage};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use super::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};

const HELP: &str = "Click a cell or press 1-9 | Arrows + Enter | R: Reset | Q: Quit";

/// Draws the whole screen and returns the layout that was used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());

    draw_header(frame, layout.header, app);
    draw_board(frame, &layout, app);
    draw_reset_button(frame, layout.reset_button);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let style = match app.message() {
        StatusMessage::Turn(_) => Style::default().fg(Color::Yellow),
        StatusMessage::Won(_) | StatusMessage::Tie => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };

    let status = Paragraph::new(app.message().to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.config().title().as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let controller = app.controller();
    let cells = controller.cells();
    let winning = controller.winning_line();

    draw_dividers(frame, layout.board);

    for pos in Position::ALL {
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            Some(Color::Green)
        } else if pos == app.cursor() {
            Some(Color::White)
        } else {
            None
        };
        let index = pos.to_index();
        draw_cell(frame, layout.cells[index], app, cells[index], pos, highlight);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    cell: Cell,
    pos: Position,
    highlight: Option<Color>,
) {
    let (symbol, base_style) = match cell {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => (
            app.config().mark_for(player).to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = match highlight {
        Some(bg) => base_style.bg(bg).fg(Color::Black),
        None => base_style,
    };

    // Pad to the cell height so the mark sits on the middle row.
    let mut lines = vec![Line::from(""); usize::from(CELL_HEIGHT / 2)];
    lines.push(Line::from(Span::raw(symbol)));
    lines.resize(usize::from(CELL_HEIGHT), Line::from(""));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_dividers(frame: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    let column = |i: u16| board.x + i * (CELL_WIDTH + 1) - 1;
    let row = |i: u16| board.y + i * (CELL_HEIGHT + 1) - 1;

    for i in 1..3 {
        let x = column(i);
        if x < board.x + board.width {
            let bar = vec![Line::from("│"); usize::from(board.height)];
            frame.render_widget(
                Paragraph::new(bar).style(style),
                Rect::new(x, board.y, 1, board.height),
            );
        }
    }

    let mut rule = String::new();
    for x in 0..board.width {
        let on_column = (1..3).any(|i| board.x + x == column(i));
        rule.push(if on_column { '┼' } else { '─' });
    }
    for i in 1..3 {
        let y = row(i);
        if y < board.y + board.height {
            frame.render_widget(
                Paragraph::new(rule.as_str()).style(style),
                Rect::new(board.x, y, board.width, 1),
            );
        }
    }
}

fn draw_reset_button(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new("Reset")
        .style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Blue,
        Player::Two => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HotseatConfig;
    use crate::tui::input::Action;
    use hotseat_tictactoe::InputEvent;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> (String, ScreenLayout) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        let mut layout = ScreenLayout::default();
        terminal
            .draw(|frame| layout = draw(frame, app))
            .expect("draw");
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, layout)
    }

    fn symbol_at(app: &App, x: u16, y: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal.draw(|frame| {
            draw(frame, app);
        })
        .expect("draw");
        terminal.backend().buffer()[(x, y)].symbol().to_string()
    }

    #[test]
    fn test_renders_status_title_and_button() {
        let app = App::new(HotseatConfig::default());
        let (text, _) = render(&app);
        assert!(text.contains("Player 1's Turn"));
        assert!(text.contains("Tic Tac Toe"));
        assert!(text.contains("Reset"));
    }

    #[test]
    fn test_renders_marks_in_cells() {
        let mut app = App::new(HotseatConfig::default());
        app.apply(Action::Game(InputEvent::CellSelected(0)));
        app.apply(Action::Game(InputEvent::CellSelected(4)));

        let (_, layout) = render(&app);
        let top_left = layout.cells[0];
        let center = layout.cells[4];
        let mid = |r: Rect| (r.x + r.width / 2, r.y + r.height / 2);

        let (x, y) = mid(top_left);
        assert_eq!(symbol_at(&app, x, y), "O");
        let (x, y) = mid(center);
        assert_eq!(symbol_at(&app, x, y), "X");
    }

    #[test]
    fn test_renders_win_message() {
        let mut app = App::new(HotseatConfig::default());
        for index in [0, 3, 1, 4, 2] {
            app.apply(Action::Game(InputEvent::CellSelected(index)));
        }
        let (text, _) = render(&app);
        assert!(text.contains("PLAYER 1 WINS!"));
    }

    #[test]
    fn test_divider_between_cells() {
        let app = App::new(HotseatConfig::default());
        let (_, layout) = render(&app);
        let first = layout.cells[0];
        assert_eq!(symbol_at(&app, first.x + first.width, first.y), "│");
        assert_eq!(symbol_at(&app, first.x + first.width, first.y + first.height), "┼");
    }
}
