//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for running the role
//! selector. The abstraction allows swapping the ratatui frontend for a
//! custom implementation (or a mock in tests) without touching the catalog,
//! filter, or controller logic.
//!
//! # Core pieces
//!
//! - **`RoleSelector`** - trait for interactive selector backends
//! - **`SelectorConfig`** - host-provided configuration (catalog, display
//!   mode, identifier pass-through, optional selection callback)
//! - **`SelectionOutcome`** - what the run produced (a selection or an abort)
//!
//! # Backend selection
//!
//! The default backend is **ratatui**, gated behind the `ratatui-tui`
//! feature (enabled by default). Tests use `MockSelector`.
//!
//! ```no_run
//! # #[cfg(feature = "ratatui-tui")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rolepick::Catalog;
//! use rolepick::ui::{RoleSelector, SelectorConfig};
//! use rolepick::ui::ratatui_adapter::RatatuiSelector;
//!
//! let config = SelectorConfig::new(Catalog::builtin())
//!     .with_identifier("chat-1234")
//!     .with_on_role_select(|title, context| {
//!         println!("picked {title}: {context}");
//!     });
//!
//! let selector = RatatuiSelector::new();
//! let outcome = selector.run(config)?;
//!
//! if let Some(selection) = outcome.selected {
//!     println!("Selected: {}", selection.title);
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "ratatui-tui"))]
//! # fn main() {}
//! ```

mod error;
mod traits;
mod types;

// Backend adapters - conditionally compiled
#[cfg(feature = "ratatui-tui")]
pub mod ratatui_adapter;

pub mod mock;

pub use error::{Result, UiError};
pub use mock::MockSelector;
pub use traits::{RoleSelector, SelectorConfig};
pub use types::{DisplayMode, SelectionOutcome, Visibility};

// Re-export the default backend when its feature is enabled
#[cfg(feature = "ratatui-tui")]
pub use ratatui_adapter::RatatuiSelector;
