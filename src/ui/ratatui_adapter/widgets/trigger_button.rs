//! Trigger button widget for the closed selector state

use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::types::DisplayMode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Trigger widget shown whether the menu is open or closed
///
/// In `Full` mode it spans the whole width with placeholder text; in
/// `Compact` mode it renders a small button aligned to the right edge.
pub struct TriggerButton<'a> {
    /// Display mode from the host configuration
    display_mode: DisplayMode,
    /// Whether the menu below is open (flips the chevron)
    is_open: bool,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> TriggerButton<'a> {
    /// Create a new trigger button widget
    #[must_use]
    pub const fn new(display_mode: DisplayMode, is_open: bool, theme: &'a Theme) -> Self {
        Self {
            display_mode,
            is_open,
            theme,
        }
    }

    const fn chevron(&self) -> &'static str {
        if self.is_open { "▴" } else { "▾" }
    }
}

/// Width of the compact trigger including borders
const COMPACT_WIDTH: u16 = 12;

impl Widget for TriggerButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_open {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        match self.display_mode {
            DisplayMode::Full => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style);
                let inner = block.inner(area);
                block.render(area, buf);

                let placeholder = Line::from(vec![
                    Span::styled("⌕ ", self.theme.dimmed_style()),
                    Span::styled("Choose a role to get started...", self.theme.dimmed_style()),
                ]);
                Paragraph::new(placeholder).render(inner, buf);

                let chevron = Line::from(Span::styled(self.chevron(), self.theme.dimmed_style()));
                Paragraph::new(chevron)
                    .alignment(Alignment::Right)
                    .render(inner, buf);
            }
            DisplayMode::Compact => {
                // Right-aligned small button
                let width = COMPACT_WIDTH.min(area.width);
                let button_area = Rect {
                    x: area.x + area.width - width,
                    y: area.y,
                    width,
                    height: area.height,
                };

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style);
                let inner = block.inner(button_area);
                block.render(button_area, buf);

                let label = Line::from(vec![
                    Span::raw("Change "),
                    Span::styled(self.chevron(), self.theme.dimmed_style()),
                ]);
                Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
        }
    }
}
