//! Role list widget for displaying the filtered catalog

use crate::catalog::RoleDefinition;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Role list widget: title and label per entry, two lines each
///
/// Shows a centered "No roles found" line when the search term filters the
/// whole catalog out.
pub struct RoleList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> RoleList<'a> {
    /// Create a new role list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let filtered = state.filtered_indices.len();
        let total = state.controller.catalog().len();
        let title = format!(" Roles ({filtered}/{total}) ");

        Self {
            state,
            theme,
            title,
        }
    }

    /// Render a single role as a two-line list item
    fn render_role(&self, role: &RoleDefinition, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let title_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.title_style()
        };

        let title_line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(role.title.clone(), title_style),
        ]);
        let label_line = Line::from(vec![
            Span::raw("  "),
            Span::styled(role.label.clone(), self.theme.dimmed_style()),
        ]);

        ListItem::new(Text::from(vec![title_line, label_line]))
    }
}

impl Widget for RoleList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.no_results() {
            let message = Line::from(Span::styled("No roles found", self.theme.dimmed_style()));
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        // Two rows per role
        let visible_roles = (inner.height as usize / 2).max(1);
        let start = self.state.scroll_offset;
        let end = (start + visible_roles).min(self.state.filtered_indices.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|visible_idx| {
                let catalog_idx = *self.state.filtered_indices.get(visible_idx)?;
                let role = self.state.controller.catalog().get(catalog_idx)?;
                let is_cursor = visible_idx == self.state.cursor;
                Some(self.render_role(role, is_cursor))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
