//! Event handling for the ratatui selector
//!
//! Maps keyboard and mouse events to state transitions, split by whether the
//! role menu is open or closed.

use super::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// A role was selected; the run should end
    Selected,
    /// The user aborted the run
    Abort,
    /// Search term changed, filtered view needs a recompute
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Handle keys while the menu is closed (trigger visible)
fn handle_closed(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter | KeyCode::Char(' '), _) => {
            state.open();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle keys while the menu is open
fn handle_open(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Dismiss keeps the search term; only selection clears it
        (KeyCode::Esc, _) => {
            state.dismiss();
            EventResult::Continue
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => {
            if state.select_current() {
                EventResult::Selected
            } else {
                EventResult::Ignored
            }
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.controller.search_term().is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::QueryChanged
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::QueryChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if !state.is_open() {
        return EventResult::Ignored;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => {
            if state.is_open() {
                handle_open(state, key)
            } else {
                handle_closed(state, key)
            }
        }
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::selector::SelectorController;
    use crate::ui::types::DisplayMode;

    fn make_state() -> AppState {
        let controller = SelectorController::new(Catalog::builtin());
        AppState::new(controller, DisplayMode::Full)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_closed_menu() {
        let mut state = make_state();

        let result = handle_closed(&mut state, key(KeyCode::Enter));
        assert_eq!(result, EventResult::Continue);
        assert!(state.is_open());
    }

    #[test]
    fn test_esc_aborts_while_closed() {
        let mut state = make_state();

        let result = handle_closed(&mut state, key(KeyCode::Esc));
        assert_eq!(result, EventResult::Abort);
    }

    #[test]
    fn test_esc_dismisses_open_menu_keeping_term() {
        let mut state = make_state();
        state.open();
        state.query_push('s');
        state.query_push('q');
        state.query_push('l');

        let result = handle_open(&mut state, key(KeyCode::Esc));
        assert_eq!(result, EventResult::Continue);
        assert!(!state.is_open());
        assert_eq!(state.controller.search_term(), "sql");
    }

    #[test]
    fn test_typing_changes_query() {
        let mut state = make_state();
        state.open();

        let result = handle_open(&mut state, key(KeyCode::Char('p')));
        assert_eq!(result, EventResult::QueryChanged);
        assert_eq!(state.controller.search_term(), "p");

        let result = handle_open(&mut state, key(KeyCode::Char('y')));
        assert_eq!(result, EventResult::QueryChanged);
        assert_eq!(state.controller.search_term(), "py");
    }

    #[test]
    fn test_backspace_on_empty_term_ignored() {
        let mut state = make_state();
        state.open();

        let result = handle_open(&mut state, key(KeyCode::Backspace));
        assert_eq!(result, EventResult::Ignored);
    }

    #[test]
    fn test_navigation_keys() {
        let mut state = make_state();
        state.open();

        assert_eq!(handle_open(&mut state, key(KeyCode::Down)), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        assert_eq!(handle_open(&mut state, key(KeyCode::Up)), EventResult::Continue);
        assert_eq!(state.cursor, 0);

        assert_eq!(handle_open(&mut state, key(KeyCode::End)), EventResult::Continue);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_enter_selects_current_role() {
        let mut state = make_state();
        state.open();
        state.cursor_down();

        let result = handle_open(&mut state, key(KeyCode::Enter));
        assert_eq!(result, EventResult::Selected);
        assert_eq!(
            state.selection.as_ref().map(|s| s.title.as_str()),
            Some("Pythonista")
        );
    }

    #[test]
    fn test_enter_with_no_results_ignored() {
        let mut state = make_state();
        state.open();
        for c in "nonexistent".chars() {
            state.query_push(c);
        }
        state.refresh_filter();
        assert!(state.no_results());

        let result = handle_open(&mut state, key(KeyCode::Enter));
        assert_eq!(result, EventResult::Ignored);
        assert!(state.is_open());
    }

    #[test]
    fn test_ctrl_u_clears_query() {
        let mut state = make_state();
        state.open();
        state.query_push('x');

        let result = handle_open(
            &mut state,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(result, EventResult::QueryChanged);
        assert_eq!(state.controller.search_term(), "");
    }
}
