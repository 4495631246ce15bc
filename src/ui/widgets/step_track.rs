//! Wizard step indicator widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::app::{Step, StepIndicator, STEPS};
use crate::ui::theme;

/// "Step n of m" label, the step names with the current one highlighted,
/// and a gauge at n/m
pub struct StepTrack {
    indicator: StepIndicator,
    current: Step,
}

impl StepTrack {
    pub fn new(indicator: StepIndicator, current: Step) -> Self {
        Self { indicator, current }
    }
}

impl Widget for StepTrack {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border())
            .title(Span::styled(
                format!(" {} ", self.indicator.label()),
                theme::heading(),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let mut spans = Vec::new();
        for (i, step) in STEPS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", theme::muted()));
            }
            let style = if *step == self.current {
                theme::step_current()
            } else if i < self.indicator.position.saturating_sub(1) {
                theme::step_done()
            } else {
                theme::step_upcoming()
            };
            spans.push(Span::styled(format!(" {} ", step.short_name()), style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(ratatui::layout::Alignment::Center)
            .render(rows[0], buf);

        Gauge::default()
            .gauge_style(theme::gauge_fill())
            .percent(self.indicator.percent().min(100))
            .label("")
            .render(rows[1], buf);
    }
}
