//! Animated spinner widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::ui::theme;

/// Braille spinner characters
const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner followed by an optional label
pub struct Spinner<'a> {
    state: usize,
    label: Option<&'a str>,
    style: Style,
}

impl<'a> Spinner<'a> {
    pub fn new(state: usize) -> Self {
        Self {
            state,
            label: None,
            style: theme::status_busy(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn char(&self) -> char {
        SPINNER_CHARS[self.state % SPINNER_CHARS.len()]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 1 {
            return;
        }
        buf.set_string(area.x, area.y, self.char().to_string(), self.style);
        if let Some(label) = self.label {
            if area.width > 2 {
                buf.set_stringn(
                    area.x + 2,
                    area.y,
                    label,
                    (area.width - 2) as usize,
                    theme::body(),
                );
            }
        }
    }
}
