//! Auto-scrolling installation log widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme;

pub struct LogView<'a> {
    lines: &'a [String],
    title: Option<&'a str>,
}

impl<'a> LogView<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, title: None }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

fn entry(line: &str) -> Line<'_> {
    let style = if line.contains("ERROR:") {
        theme::log_error()
    } else {
        theme::body()
    };
    Line::from(Span::styled(line, style))
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border());

        if let Some(title) = self.title {
            block = block.title(Span::styled(title, theme::heading()));
        }

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Always follow the latest entry: take entries from the end until
        // their wrapped rows fill the view
        let height = inner.height as usize;
        let mut rows = 0;
        let mut start = self.lines.len();
        while start > 0 && rows < height {
            start -= 1;
            rows += Paragraph::new(entry(&self.lines[start]))
                .wrap(Wrap { trim: false })
                .line_count(inner.width)
                .max(1);
        }

        let visible_lines: Vec<Line> = self.lines[start..].iter().map(|line| entry(line)).collect();
        let overflow = rows.saturating_sub(height) as u16;

        Paragraph::new(visible_lines)
            .wrap(Wrap { trim: false })
            .scroll((overflow, 0))
            .render(inner, buf);
    }
}
