//! Common types for the UI abstraction layer

use crate::selector::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the closed-state trigger is rendered
///
/// Purely presentational; filtering and state transitions are identical in
/// both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Small trigger button aligned to the end of its container
    Compact,
    /// Full-width trigger with placeholder text
    #[default]
    Full,
}

impl DisplayMode {
    /// String representation for config files and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conversation visibility, accepted for forward compatibility
///
/// Carried through untouched; has no effect on selector behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible only to the current user
    #[default]
    Private,
    /// Visible to anyone with the link
    Public,
}

/// Result of running a selector backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// The role the user picked, if any
    pub selected: Option<Selection>,
    /// Whether the user aborted without selecting
    pub aborted: bool,
}

impl SelectionOutcome {
    /// Create an outcome carrying a selection
    #[must_use]
    pub const fn selected(selection: Selection) -> Self {
        Self {
            selected: Some(selection),
            aborted: false,
        }
    }

    /// Create an outcome for an aborted run
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            selected: None,
            aborted: true,
        }
    }
}
