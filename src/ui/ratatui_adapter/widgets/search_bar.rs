//! Search bar widget for filter input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the current search term with a cursor
pub struct SearchBar<'a> {
    /// Current search term
    term: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(term: &'a str, theme: &'a Theme) -> Self {
        Self { term, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));

        let line = if self.term.is_empty() {
            Line::from(vec![
                cursor,
                Span::styled("Search roles...", self.theme.dimmed_style()),
            ])
        } else {
            Line::from(vec![Span::raw(self.term), cursor])
        };

        Paragraph::new(line).render(inner, buf);
    }
}
