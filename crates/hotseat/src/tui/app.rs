//! Application state and logic.

use hotseat_tictactoe::{GameController, InputEvent, Position, StatusMessage};
use tracing::{debug, instrument};

use super::input::{Action, move_cursor};
use super::layout::ScreenLayout;
use crate::config::HotseatConfig;

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    config: HotseatConfig,
    message: StatusMessage,
    cursor: Position,
    layout: ScreenLayout,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: HotseatConfig) -> Self {
        let controller = GameController::new();
        let message = controller.status_message();
        Self {
            controller,
            config,
            message,
            cursor: Position::Center,
            layout: ScreenLayout::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Gets the configuration.
    pub fn config(&self) -> &HotseatConfig {
        &self.config
    }

    /// Gets the current status message.
    pub fn message(&self) -> StatusMessage {
        self.message
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Geometry of the frame on screen.
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Records the geometry of the frame just drawn.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one action to the application.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Game(event) => self.dispatch(event),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::SelectCursor => self.dispatch(InputEvent::CellSelected(self.cursor.to_index())),
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        if let InputEvent::CellSelected(index) = event
            && let Some(pos) = Position::from_index(index)
        {
            self.cursor = pos;
        }
        self.message = self.controller.handle_event(event);
        debug!(message = %self.message, "Event handled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Direction;
    use hotseat_tictactoe::{Cell, Player};

    fn app() -> App {
        App::new(HotseatConfig::default())
    }

    #[test]
    fn test_starts_with_player_one() {
        let app = app();
        assert_eq!(app.message().to_string(), "Player 1's Turn");
        assert_eq!(app.cursor(), Position::Center);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_cursor_selection_places_mark() {
        let mut app = app();
        app.apply(Action::MoveCursor(Direction::Up));
        app.apply(Action::SelectCursor);
        assert_eq!(
            app.controller().cells()[Position::TopCenter.to_index()],
            Cell::Occupied(Player::One)
        );
        assert_eq!(app.message().to_string(), "Player 2's Turn");
    }

    #[test]
    fn test_click_moves_cursor() {
        let mut app = app();
        app.apply(Action::Game(InputEvent::CellSelected(6)));
        assert_eq!(app.cursor(), Position::BottomLeft);
    }

    #[test]
    fn test_win_then_reset() {
        let mut app = app();
        for index in [0, 3, 1, 4, 2] {
            app.apply(Action::Game(InputEvent::CellSelected(index)));
        }
        assert_eq!(app.message().to_string(), "PLAYER 1 WINS!");

        app.apply(Action::Game(InputEvent::ResetRequested));
        assert_eq!(app.message().to_string(), "Player 1's Turn");
        assert_eq!(app.controller().board().move_count(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
