//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FlightmarkError;
use crate::tui::app::App;

/// Key summary shown by `?` and in the idle status bar.
pub const HELP: &str = "space:mark | a:add | e:edit | t:retime | d:del | R:reset | m:mode | p:play | ←/→:seek | ,/.:frame | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, FlightmarkError> {
    // Short timeout so the playhead keeps redrawing while playing
    if event::poll(Duration::from_millis(100))
        .map_err(|e| FlightmarkError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| FlightmarkError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Apply one key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.prompt.is_some() {
        match key.code {
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.prompt_backspace(),
            KeyCode::Char(c) => app.prompt_push(c),
            _ => {}
        }
        return None;
    }

    if app.confirm_reset {
        app.answer_reset(matches!(key.code, KeyCode::Char('y' | 'Y')));
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Marking
        KeyCode::Char(' ') => app.mark(),
        KeyCode::Char('a') => app.begin_add(),
        KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('t') => app.retime_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('R') => app.request_reset(),
        KeyCode::Char('m') => app.toggle_mode(),

        // Playback
        KeyCode::Char('p') | KeyCode::Enter => app.toggle_playback(),
        KeyCode::Left => app.seek_steps(-1.0),
        KeyCode::Right => app.seek_steps(1.0),
        KeyCode::Char(',') => app.step_frames(-1),
        KeyCode::Char('.') => app.step_frames(1),
        KeyCode::Home => app.seek_start(),
        KeyCode::Char('g') => app.seek_to_selected(),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        KeyCode::Char('?') => app.status = Some(HELP.to_string()),

        _ => {}
    }

    None
}
