//! Core traits for the UI abstraction layer

use super::error::Result;
use super::types::{DisplayMode, SelectionOutcome, Visibility};
use crate::catalog::Catalog;
use crate::selector::RoleSelectCallback;

/// Configuration for a selector run
///
/// Built by the host and consumed by a backend. Not `Clone` because it may
/// carry the host's selection callback.
pub struct SelectorConfig {
    /// Catalog to select from
    pub catalog: Catalog,
    /// Opaque conversation/session identifier, passed through uninterpreted
    pub identifier: String,
    /// How the closed-state trigger is rendered
    pub display_mode: DisplayMode,
    /// Conversation visibility pass-through (no behavioral effect)
    pub visibility: Visibility,
    /// Optional host callback invoked with `(title, context)` on selection
    pub on_role_select: Option<RoleSelectCallback>,
}

impl SelectorConfig {
    /// Create a basic selector configuration
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            identifier: String::new(),
            display_mode: DisplayMode::default(),
            visibility: Visibility::default(),
            on_role_select: None,
        }
    }

    /// Set the conversation identifier
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Set the trigger display mode
    #[must_use]
    pub const fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Set the visibility pass-through
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Register the selection callback
    #[must_use]
    pub fn with_on_role_select(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_role_select = Some(Box::new(callback));
        self
    }
}

/// Trait for selector backend implementations
///
/// Abstracts the rendering layer so the ratatui frontend can be swapped for
/// a custom implementation or a mock without changing host code.
pub trait RoleSelector {
    /// Run the selector with the given configuration
    ///
    /// Returns when the user selects a role or aborts. The configured
    /// callback, if any, has already fired by the time this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be initialized or the
    /// interaction fails at the terminal layer.
    fn run(&self, config: SelectorConfig) -> Result<SelectionOutcome>;
}
