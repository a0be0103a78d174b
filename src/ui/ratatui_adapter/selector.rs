//! Ratatui-based selector implementation
//!
//! Implements the `RoleSelector` trait: terminal setup, the render/event
//! loop, and teardown. Rendering is a pure projection of `AppState`;
//! drawing the same state twice produces the same frame.

use super::events::{EventResult, poll_and_handle};
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{HelpBar, KeyHint, RoleList, SearchBar, TriggerButton};
use crate::selector::SelectorController;
use crate::ui::error::{Result, UiError};
use crate::ui::traits::{RoleSelector, SelectorConfig};
use crate::ui::types::SelectionOutcome;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Ratatui-based role selector
pub struct RatatuiSelector {
    theme: Theme,
}

impl RatatuiSelector {
    /// Create a new ratatui selector with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|e| UiError::TerminalError(e.to_string()))
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Hints for the bottom bar, depending on menu state
    fn build_hints(is_open: bool) -> Vec<KeyHint> {
        if is_open {
            vec![
                KeyHint::new("↑/↓", "navigate"),
                KeyHint::new("Enter", "select"),
                KeyHint::new("ESC", "close"),
                KeyHint::new("type", "search"),
            ]
        } else {
            vec![
                KeyHint::new("Enter", "choose a role"),
                KeyHint::new("ESC", "quit"),
            ]
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        let hints = Self::build_hints(state.is_open());

        if state.is_open() {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Trigger
                    Constraint::Length(3), // Search bar
                    Constraint::Min(4),    // Role list
                    Constraint::Length(1), // Help bar
                ])
                .split(area);

            // Two rows per role inside the list borders
            state.visible_height = ((layout[2].height.saturating_sub(2)) / 2).max(1) as usize;

            let trigger = TriggerButton::new(state.display_mode, true, &self.theme);
            frame.render_widget(trigger, layout[0]);

            let search_bar = SearchBar::new(state.controller.search_term(), &self.theme);
            frame.render_widget(search_bar, layout[1]);

            let role_list = RoleList::new(state, &self.theme);
            frame.render_widget(role_list, layout[2]);

            let help_bar = HelpBar::new(&hints, &self.theme);
            frame.render_widget(help_bar, layout[3]);
        } else {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Trigger
                    Constraint::Min(0),    // Empty
                    Constraint::Length(1), // Help bar
                ])
                .split(area);

            let trigger = TriggerButton::new(state.display_mode, false, &self.theme);
            frame.render_widget(trigger, layout[0]);

            let help_bar = HelpBar::new(&hints, &self.theme);
            frame.render_widget(help_bar, layout[2]);
        }
    }

    /// Run the selector event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        config: SelectorConfig,
    ) -> Result<SelectionOutcome> {
        let mut controller = SelectorController::new(config.catalog);
        controller.set_callback(config.on_role_select);
        let mut state = AppState::new(controller, config.display_mode);

        loop {
            terminal.draw(|frame| self.render(frame, &mut state))?;

            match poll_and_handle(&mut state, Duration::from_millis(50))? {
                EventResult::Abort => state.abort(),
                EventResult::QueryChanged => state.refresh_filter(),
                EventResult::Selected | EventResult::Continue | EventResult::Ignored => {}
            }

            if state.should_exit {
                break;
            }
        }

        if state.aborted {
            Ok(SelectionOutcome::aborted())
        } else {
            state.selection.take().map_or_else(
                || Ok(SelectionOutcome::aborted()),
                |selection| Ok(SelectionOutcome::selected(selection)),
            )
        }
    }
}

impl Default for RatatuiSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleSelector for RatatuiSelector {
    fn run(&self, config: SelectorConfig) -> Result<SelectionOutcome> {
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, config);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_creation() {
        let selector = RatatuiSelector::new();
        let themed = selector.with_theme(Theme::dark());
        assert_eq!(themed.theme.selection_fg, Theme::dark().selection_fg);
    }

    #[test]
    fn test_hints_differ_by_menu_state() {
        let open = RatatuiSelector::build_hints(true);
        let closed = RatatuiSelector::build_hints(false);

        assert!(open.iter().any(|h| h.action == "select"));
        assert!(closed.iter().any(|h| h.action == "quit"));
    }
}
