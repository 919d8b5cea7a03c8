//! Terminal front end: event loop, input mapping, and rendering.

mod app;
mod input;
mod layout;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::HotseatConfig;
use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Restores the terminal when dropped.
///
/// Created as soon as raw mode is on, before any other setup step can fail,
/// so every later exit path unwinds raw mode, the alternate screen, and mouse
/// capture.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Takes ownership of restoring a terminal that is already in raw mode.
    fn new(out: W) -> Self {
        Self { out }
    }

    /// Switches to the alternate screen and captures the mouse.
    fn enter_screen(mut self) -> io::Result<Self> {
        execute!(self.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(self)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Puts the terminal into game mode.
fn enter_terminal() -> Result<TerminalGuard<Stdout>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    TerminalGuard::new(io::stdout())
        .enter_screen()
        .context("Failed to enter alternate screen")
}

/// Runs the game until the user quits.
#[instrument(skip_all)]
pub fn run(config: HotseatConfig) -> Result<()> {
    info!("Starting terminal UI");

    let _guard = enter_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;
    let mut app = App::new(config);
    run_app(&mut terminal, &mut app)?;

    info!("Terminal UI closed");
    Ok(())
}

/// One event at a time: draw, wait for input, apply, repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut layout = *app.layout();
        terminal.draw(|frame| layout = ui::draw(frame, app))?;
        app.set_layout(layout);

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = event::read()?;
        if let Some(action) = input::map_event(&event, app.layout()) {
            debug!(?action, "Input mapped");
            app.apply(action);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
