//! Application state for the ratatui selector
//!
//! Wraps the core `SelectorController` with terminal-only concerns: cursor
//! position within the filtered list, scroll offset, and exit flags. The
//! controller stays the sole writer of the search term and open/closed
//! state; every mutation here goes through it.

use crate::catalog::RoleDefinition;
use crate::selector::{Selection, SelectorController};
use crate::ui::types::DisplayMode;

/// State for one selector run
pub struct AppState {
    /// Core state machine and catalog owner
    pub controller: SelectorController,
    /// How the closed-state trigger is rendered
    pub display_mode: DisplayMode,
    /// Catalog positions visible under the current search term
    pub filtered_indices: Vec<usize>,
    /// Cursor position within the filtered list
    pub cursor: usize,
    /// Scroll offset for the role list
    pub scroll_offset: usize,
    /// Number of roles visible in the list area (set during render)
    pub visible_height: usize,
    /// Whether the run should exit
    pub should_exit: bool,
    /// Whether the run was aborted
    pub aborted: bool,
    /// The selection made, if any
    pub selection: Option<Selection>,
}

impl AppState {
    /// Create state for a run over the given controller
    #[must_use]
    pub fn new(controller: SelectorController, display_mode: DisplayMode) -> Self {
        let filtered_indices = controller.filtered_indices();

        Self {
            controller,
            display_mode,
            filtered_indices,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 10, // Default, updated during render
            should_exit: false,
            aborted: false,
            selection: None,
        }
    }

    /// Whether the role menu is open
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Open the menu
    pub const fn open(&mut self) {
        self.controller.open();
    }

    /// Close the menu without selecting (search term retained)
    pub const fn dismiss(&mut self) {
        self.controller.dismiss();
    }

    /// Recompute the filtered view after a search term change
    pub fn refresh_filter(&mut self) {
        self.filtered_indices = self.controller.filtered_indices();
        // Reset cursor if it's out of bounds
        if self.cursor >= self.filtered_indices.len() {
            self.cursor = self.filtered_indices.len().saturating_sub(1);
        }
        self.scroll_offset = 0;
        self.adjust_scroll();
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered_indices.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Jump to first role
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last role
    pub const fn jump_to_end(&mut self) {
        self.cursor = self.filtered_indices.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0
            && self.cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = self.cursor.saturating_sub(self.visible_height - 1);
        }
    }

    /// The role under the cursor
    #[must_use]
    pub fn current_role(&self) -> Option<&RoleDefinition> {
        self.filtered_indices
            .get(self.cursor)
            .and_then(|&idx| self.controller.catalog().get(idx))
    }

    /// Append a character to the search term
    pub fn query_push(&mut self, c: char) {
        let mut term = self.controller.search_term().to_string();
        term.push(c);
        self.controller.set_search_term(term);
    }

    /// Remove the last character of the search term
    pub fn query_backspace(&mut self) {
        let mut term = self.controller.search_term().to_string();
        term.pop();
        self.controller.set_search_term(term);
    }

    /// Delete the last word of the search term
    pub fn query_delete_word(&mut self) {
        let term = self.controller.search_term();
        let trimmed = term.trim_end();
        let cut = trimmed.rfind(' ').map_or(0, |idx| idx + 1);
        let term = term[..cut].to_string();
        self.controller.set_search_term(term);
    }

    /// Clear the search term
    pub fn query_clear(&mut self) {
        self.controller.set_search_term(String::new());
    }

    /// Whether the current term filters everything out
    #[must_use]
    pub fn no_results(&self) -> bool {
        self.controller.no_results()
    }

    /// Select the role under the cursor
    ///
    /// Returns `true` if a selection was made; fires the host callback and
    /// marks the run for exit.
    pub fn select_current(&mut self) -> bool {
        match self.controller.select(self.cursor) {
            Some(selection) => {
                self.selection = Some(selection);
                self.should_exit = true;
                self.refresh_filter();
                true
            }
            None => false,
        }
    }

    /// Mark the run as aborted
    pub const fn abort(&mut self) {
        self.should_exit = true;
        self.aborted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn make_state() -> AppState {
        let controller = SelectorController::new(Catalog::builtin());
        AppState::new(controller, DisplayMode::Full)
    }

    #[test]
    fn test_initial_filtered_view() {
        let state = make_state();

        assert_eq!(state.filtered_indices, vec![0, 1, 2, 3]);
        assert_eq!(state.cursor, 0);
        assert!(!state.is_open());
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = make_state();

        state.cursor_down();
        assert_eq!(state.cursor, 1);

        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 3);

        // Should not go past end
        state.cursor_down();
        assert_eq!(state.cursor, 3);

        state.cursor_up();
        assert_eq!(state.cursor, 2);

        state.jump_to_start();
        assert_eq!(state.cursor, 0);

        state.jump_to_end();
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_query_editing_refreshes_filter() {
        let mut state = make_state();
        state.open();

        for c in "sql".chars() {
            state.query_push(c);
        }
        state.refresh_filter();

        assert_eq!(state.controller.search_term(), "sql");
        assert_eq!(state.filtered_indices, vec![3]);

        state.query_backspace();
        state.refresh_filter();
        assert_eq!(state.controller.search_term(), "sq");

        state.query_clear();
        state.refresh_filter();
        assert_eq!(state.filtered_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_query_delete_word() {
        let mut state = make_state();

        for c in "data analysis".chars() {
            state.query_push(c);
        }
        state.query_delete_word();
        assert_eq!(state.controller.search_term(), "data ");

        state.query_delete_word();
        assert_eq!(state.controller.search_term(), "");
    }

    #[test]
    fn test_cursor_clamped_on_filter_change() {
        let mut state = make_state();

        state.jump_to_end();
        assert_eq!(state.cursor, 3);

        for c in "sql".chars() {
            state.query_push(c);
        }
        state.refresh_filter();

        // One match left, cursor clamped onto it
        assert_eq!(state.cursor, 0);
        assert_eq!(state.current_role().map(|r| r.title.as_str()), Some("DB Magician"));
    }

    #[test]
    fn test_select_current() {
        let mut state = make_state();
        state.open();

        state.cursor_down();
        assert!(state.select_current());

        assert!(state.should_exit);
        assert!(!state.aborted);
        assert_eq!(
            state.selection.as_ref().map(|s| s.title.as_str()),
            Some("Pythonista")
        );
        assert!(!state.is_open());
        assert_eq!(state.controller.search_term(), "");
    }

    #[test]
    fn test_select_while_closed_is_noop() {
        let mut state = make_state();

        assert!(!state.select_current());
        assert!(!state.should_exit);
        assert!(state.selection.is_none());
    }

    #[test]
    fn test_abort() {
        let mut state = make_state();
        state.open();
        state.query_push('x');
        state.abort();

        assert!(state.should_exit);
        assert!(state.aborted);
        // Abort leaves the retained term alone
        assert_eq!(state.controller.search_term(), "x");
    }
}
