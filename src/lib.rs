//! Rolepick - a searchable role selector for terminal chat frontends
//!
//! This library provides a small dropdown-style widget for picking a
//! predefined "role" (a persona preset carrying a system-prompt context)
//! from a fixed catalog, filtering the catalog by free-text search, and
//! handing the chosen role off to the host application.
//!
//! # Architecture
//!
//! - `catalog`: immutable role definitions and the built-in catalog
//! - `filter`: pure substring filtering over the catalog
//! - `selector`: open/closed state machine and selection notification
//! - `ui`: backend-agnostic selector trait plus the ratatui adapter

pub mod catalog;
pub mod filter;
pub mod selector;
pub mod ui;

pub use catalog::{Catalog, RoleDefinition};
pub use filter::{filter, filter_indices};
pub use selector::{Selection, SelectorController, SelectorState};
