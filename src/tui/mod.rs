//! Terminal User Interface (TUI) for flightmark.
//!
//! The interactive marker: a virtual playhead the user plays, pauses and
//! seeks while marking points against it. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Prompt, PromptKind};

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::prelude::*;

use crate::core::{Calculator, PlaybackClock, TimePointStore};
use crate::error::FlightmarkError;
use crate::logging::LevelCap;

/// Run the marker until the user quits.
///
/// Returns the store as it stood on exit.
///
/// # Errors
///
/// Returns `FlightmarkError::Terminal` if the TUI fails to initialize or run.
pub fn run(
    store: TimePointStore,
    clock: PlaybackClock,
    calculator: Calculator,
    seek_step: f64,
) -> Result<TimePointStore, FlightmarkError> {
    // stderr lines would land on top of the alternate screen
    let quiet = LevelCap::new(LevelFilter::Off);

    enable_raw_mode()
        .map_err(|e| FlightmarkError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let restore = RestoreOnDrop { out: io::stdout() };

    let mut terminal = setup_terminal(io::stdout())?;
    let mut app = App::new(store, clock, calculator, seek_step);
    let result = run_app(&mut terminal, &mut app);

    drop(restore);
    drop(quiet);
    log::info!("marker closed with {} points", app.store.len());
    result.map(|()| app.store)
}

/// Leaves raw mode and the alternate screen when dropped, so every exit
/// path after `enable_raw_mode` hands back a usable shell.
struct RestoreOnDrop<W: Write> {
    out: W,
}

impl<W: Write> Drop for RestoreOnDrop<W> {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.out, LeaveAlternateScreen, Show).ok();
    }
}

fn setup_terminal<W: Write>(
    mut out: W,
) -> Result<Terminal<CrosstermBackend<W>>, FlightmarkError> {
    execute!(out, EnterAlternateScreen)
        .map_err(|e| FlightmarkError::Terminal(format!("Failed to setup terminal: {e}")))?;

    Terminal::new(CrosstermBackend::new(out))
        .map_err(|e| FlightmarkError::Terminal(format!("Failed to create terminal: {e}")))
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), FlightmarkError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FlightmarkError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(event::Action::Quit) = event::handle_events(app)? {
            app.should_quit = true;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        drop(RestoreOnDrop { out: &mut out });

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn test_setup_failure_is_a_terminal_error() {
        let err = setup_terminal(ClosedPipe).err().unwrap();
        assert!(matches!(err, FlightmarkError::Terminal(_)));
    }
}
