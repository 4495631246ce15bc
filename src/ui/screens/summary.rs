//! Review before installing

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;
use crate::app::App;
use crate::ui::theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    if let Some(ref summary) = app.summary {
        for (label, value) in [
            ("  Language: ", summary.language.as_str()),
            ("  Timezone: ", summary.timezone.as_str()),
            ("  Disk:     ", summary.disk.as_str()),
            ("  Username: ", summary.username.as_str()),
        ] {
            lines.push(Line::from(vec![
                Span::styled(label, theme::muted()),
                Span::styled(value, theme::body()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  ⚠ WARNING: All data on {} will be erased!", summary.disk),
            theme::danger(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Enter to start the installation.",
        theme::body(),
    )));

    let content = Paragraph::new(lines).block(panel(" Summary "));
    frame.render_widget(content, area);
}
