//! Welcome screen

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;
use crate::app::App;
use crate::ui::theme;
use crate::ui::widgets::Spinner;

/// ASCII logo (all lines padded to same width for proper centering)
const LOGO: &[&str] = &[
    r#" _____          _              ___  ____  "#,
    r#"|_   _|_      _(_)_ __   __ _ / _ \/ ___| "#,
    r#"  | | \ \ /\ / / | '_ \ / _` | | | \___ \ "#,
    r#"  | |  \ V  V /| | | | | (_| | |_| |___) |"#,
    r#"  |_|   \_/\_/ |_|_| |_|\__,_|\___/|____/ "#,
];

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    for row in LOGO {
        lines.push(Line::from(Span::styled(*row, theme::heading())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Welcome to the TwinaOS installer.",
        theme::body(),
    )));
    lines.push(Line::from(Span::styled(
        "You will choose a language, a target disk and a user account,",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "review your choices, and then install.",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    let service = match app.service_reachable {
        Some(true) => Line::from(vec![
            Span::styled("✓ ", theme::status_ok()),
            Span::styled("Installer service ready", theme::body()),
        ]),
        Some(false) => Line::from(vec![
            Span::styled("✗ ", theme::status_failed()),
            Span::styled(
                format!("Installer service unreachable at {}", app.config.service.base_url),
                theme::status_failed(),
            ),
        ]),
        None => Line::from(vec![
            Span::styled(format!("{} ", Spinner::new(app.spinner_state).char()), theme::status_busy()),
            Span::styled("Contacting installer service...", theme::muted()),
        ]),
    };
    lines.push(service);

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(" Welcome "));
    frame.render_widget(content, area);
}
