//! Ratatui-based selector adapter
//!
//! Implements the `RoleSelector` trait using ratatui for rendering and
//! crossterm for events. All selection and filtering semantics live in the
//! core `SelectorController`; this adapter only adds terminal concerns
//! (cursor, scrolling, layout) on top.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiSelector                   │
//! │  (implements RoleSelector trait)            │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ Controller │ │  Ratatui  │ │ Crossterm │
//! │  (state)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod events;
mod selector;
mod state;
mod theme;
pub mod widgets;

pub use selector::RatatuiSelector;
pub use state::AppState;
pub use theme::Theme;
