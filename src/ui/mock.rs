//! Mock selector backend for testing
//!
//! Drives the same controller logic as the interactive backends so tests
//! exercise the real selection semantics without a terminal.

use super::error::Result;
use super::traits::{RoleSelector, SelectorConfig};
use super::types::SelectionOutcome;
use crate::selector::SelectorController;

/// Mock selector that picks a predetermined role by title
#[derive(Debug, Clone, Default)]
pub struct MockSelector {
    /// Search term to type before selecting (empty for no filtering)
    pub search_term: String,
    /// Title of the role to select; `None` simulates user abort
    pub pick_title: Option<String>,
}

impl MockSelector {
    /// Create a mock that selects the role with the given title
    #[must_use]
    pub fn picking(title: impl Into<String>) -> Self {
        Self {
            search_term: String::new(),
            pick_title: Some(title.into()),
        }
    }

    /// Create a mock that simulates user abort
    #[must_use]
    pub fn aborted() -> Self {
        Self::default()
    }

    /// Type a search term before selecting
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }
}

impl RoleSelector for MockSelector {
    fn run(&self, config: SelectorConfig) -> Result<SelectionOutcome> {
        let mut controller = SelectorController::new(config.catalog);
        controller.set_callback(config.on_role_select);

        controller.open();
        controller.set_search_term(self.search_term.clone());

        let Some(title) = &self.pick_title else {
            controller.dismiss();
            return Ok(SelectionOutcome::aborted());
        };

        let position = controller
            .filtered()
            .iter()
            .position(|role| &role.title == title);

        match position.and_then(|idx| controller.select(idx)) {
            Some(selection) => Ok(SelectionOutcome::selected(selection)),
            None => {
                controller.dismiss();
                Ok(SelectionOutcome::aborted())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_mock_picks_role() {
        let selector = MockSelector::picking("DB Magician");
        let config = SelectorConfig::new(Catalog::builtin());
        let outcome = selector.run(config).unwrap();

        assert!(!outcome.aborted);
        let selection = outcome.selected.unwrap();
        assert_eq!(selection.title, "DB Magician");
        assert!(selection.context.contains("database expert"));
    }

    #[test]
    fn test_mock_aborted() {
        let selector = MockSelector::aborted();
        let config = SelectorConfig::new(Catalog::builtin());
        let outcome = selector.run(config).unwrap();

        assert!(outcome.aborted);
        assert!(outcome.selected.is_none());
    }

    #[test]
    fn test_mock_respects_filter() {
        // The filter hides every role, so the pick cannot land
        let selector = MockSelector::picking("Terraform").with_search_term("nonexistent");
        let config = SelectorConfig::new(Catalog::builtin());
        let outcome = selector.run(config).unwrap();

        assert!(outcome.aborted);
    }
}
