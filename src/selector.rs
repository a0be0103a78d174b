//! Selection controller: open/closed state machine and host notification
//!
//! The controller is the sole writer of the selector state. Display layers
//! read the state and derive the visible role list; every transition goes
//! through one of the methods here.

use crate::catalog::{Catalog, RoleDefinition};
use crate::filter::{filter, filter_indices};

/// Host callback invoked with `(title, context)` on every selection
pub type RoleSelectCallback = Box<dyn FnMut(&str, &str)>;

/// Mutable selector state, owned exclusively by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    /// Whether the role menu is open
    pub is_open: bool,
    /// Current filter text, retained across dismissals
    pub search_term: String,
}

impl SelectorState {
    /// Initial state: closed with an empty search term
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_open: false,
            search_term: String::new(),
        }
    }
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed selection, as emitted to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Title of the chosen role
    pub title: String,
    /// Full context text of the chosen role
    pub context: String,
}

/// Owns the selector state and mediates all transitions
///
/// Selecting a role closes the menu, clears the search term, and invokes the
/// host callback exactly once. Dismissing without selecting closes the menu
/// but keeps the search term, so cancel and select stay distinguishable.
pub struct SelectorController {
    catalog: Catalog,
    state: SelectorState,
    on_role_select: Option<RoleSelectCallback>,
}

impl SelectorController {
    /// Create a controller over the given catalog, initially closed
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: SelectorState::new(),
            on_role_select: None,
        }
    }

    /// Register the host callback invoked on every selection
    ///
    /// The callback is optional; selecting without one is a silent no-op on
    /// the notification side (the state transition still happens).
    #[must_use]
    pub fn with_callback(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_role_select = Some(Box::new(callback));
        self
    }

    /// Install or replace the host callback after construction
    pub fn set_callback(&mut self, callback: Option<RoleSelectCallback>) {
        self.on_role_select = callback;
    }

    /// The catalog this controller selects from
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the menu is currently open
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Current search term
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    /// Snapshot of the current state
    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Open the menu
    pub const fn open(&mut self) {
        self.state.is_open = true;
    }

    /// Close the menu without selecting
    ///
    /// The search term is deliberately retained; only a selection clears it.
    pub const fn dismiss(&mut self) {
        self.state.is_open = false;
    }

    /// Toggle between open and closed
    pub const fn toggle(&mut self) {
        self.state.is_open = !self.state.is_open;
    }

    /// Set the search term verbatim (no trimming, no debouncing)
    ///
    /// The value is retained while closed but only actionable while open.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    /// Roles visible under the current search term, in catalog order
    #[must_use]
    pub fn filtered(&self) -> Vec<&RoleDefinition> {
        filter(&self.catalog, &self.state.search_term)
    }

    /// Catalog positions visible under the current search term
    #[must_use]
    pub fn filtered_indices(&self) -> Vec<usize> {
        filter_indices(&self.catalog, &self.state.search_term)
    }

    /// Whether the current term filters everything out
    ///
    /// Distinguishes "no results" from "no filter applied": an empty catalog
    /// view with an empty term is not a no-results condition.
    #[must_use]
    pub fn no_results(&self) -> bool {
        !self.state.search_term.is_empty() && self.filtered_indices().is_empty()
    }

    /// Select the role at `index` within the current filtered view
    ///
    /// Only meaningful while open: returns `None` while closed or when the
    /// index falls outside the filtered view. On success the host callback
    /// fires exactly once, the menu closes, and the search term resets.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        if !self.state.is_open {
            return None;
        }

        let catalog_idx = *self.filtered_indices().get(index)?;
        let role = self.catalog.get(catalog_idx)?;
        let selection = Selection {
            title: role.title.clone(),
            context: role.context.clone(),
        };

        self.state.is_open = false;
        self.state.search_term.clear();

        if let Some(callback) = &mut self.on_role_select {
            callback(&selection.title, &selection.context);
        }

        Some(selection)
    }
}
