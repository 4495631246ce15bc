//! Installation finished

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;
use crate::app::App;
use crate::ui::theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("✓ Installation Complete", theme::status_ok())),
        Line::from(""),
        Line::from(Span::styled(
            "TwinaOS has been installed successfully.",
            theme::body(),
        )),
        Line::from(Span::styled(
            "Remove the installation media and reboot to start using your system.",
            theme::muted(),
        )),
        Line::from(""),
    ];

    if app.reboot_requested {
        lines.push(Line::from(Span::styled("Rebooting...", theme::hint())));
    }

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(" Complete "));
    frame.render_widget(content, area);
}
