//! Ratatui widgets for the selector TUI

mod help_bar;
mod role_list;
mod search_bar;
mod trigger_button;

pub use help_bar::{HelpBar, KeyHint};
pub use role_list::RoleList;
pub use search_bar::SearchBar;
pub use trigger_button::TriggerButton;
