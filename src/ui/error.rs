//! UI error types

use thiserror::Error;

/// Errors that can occur while running a selector backend
///
/// The selector core has no failure states of its own; everything here comes
/// from the terminal layer.
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup or teardown failed
    #[error("Failed to initialize terminal: {0}")]
    TerminalError(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
