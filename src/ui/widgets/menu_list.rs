//! Option list with a cursor and a chosen entry

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::ui::theme;

pub struct MenuList<'a> {
    items: Vec<&'a str>,
    cursor: usize,
    chosen: Option<usize>,
    focused: bool,
    title: Option<&'a str>,
}

impl<'a> MenuList<'a> {
    pub fn new(items: Vec<&'a str>, cursor: usize) -> Self {
        // Clamp cursor to valid range to prevent out-of-bounds access
        let cursor = if items.is_empty() {
            0
        } else {
            cursor.min(items.len() - 1)
        };

        Self {
            items,
            cursor,
            chosen: None,
            focused: true,
            title: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Mark the entry that is currently chosen
    pub fn chosen(mut self, chosen: Option<usize>) -> Self {
        self.chosen = chosen;
        self
    }

    /// Unfocused lists show their cursor dimmed
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if self.chosen == Some(i) { "● " } else { "  " };
                let style = if i == self.cursor && self.focused {
                    theme::cursor()
                } else if self.chosen == Some(i) {
                    theme::chosen()
                } else {
                    theme::body()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(*item, style),
                ]))
            })
            .collect();

        let border = if self.focused {
            theme::panel_border_focused()
        } else {
            theme::panel_border()
        };
        let mut block = Block::default().borders(Borders::ALL).border_style(border);

        if let Some(title) = self.title {
            block = block.title(Span::styled(title, theme::heading()));
        }

        let list = List::new(items).block(block);

        // Use StatefulWidget so long lists scroll to the cursor
        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
