//! Installation progress screen

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use super::panel;
use crate::app::{App, InstallPhase};
use crate::ui::layout::install_layout;
use crate::ui::theme;
use crate::ui::widgets::{LogView, Spinner};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (status_area, gauge_area, log_area) = install_layout(area);
    let install = &app.install;

    let (icon, style) = match install.phase {
        InstallPhase::Failed => ("✗".to_string(), theme::status_failed()),
        InstallPhase::Finishing | InstallPhase::Finished => ("✓".to_string(), theme::status_ok()),
        _ => (Spinner::new(app.spinner_state).char().to_string(), theme::status_busy()),
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", icon), style),
        Span::styled(install.status.as_str(), theme::body()),
    ]))
    .block(panel(" Status "));
    frame.render_widget(status, status_area);

    let gauge = Gauge::default()
        .block(panel(" Progress "))
        .gauge_style(theme::gauge_fill())
        .percent(install.progress.min(100));
    frame.render_widget(gauge, gauge_area);

    frame.render_widget(LogView::new(&install.log).title(" Log "), log_area);
}
