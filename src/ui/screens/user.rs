//! User account form

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;
use crate::app::{App, UserField};
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::ui::theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let fields = [
        ("  Full name:        ", UserField::FullName, form.fullname.clone()),
        ("  Username:         ", UserField::Username, form.username.clone()),
        ("  Password:         ", UserField::Password, mask(&form.password)),
        ("  Confirm Password: ", UserField::ConfirmPassword, mask(&form.password_confirm)),
    ];

    let mut lines = vec![Line::from("")];
    for (label, field, value) in fields {
        let active = app.user_field == field;
        // Show cursor on active field
        let (display, style) = if active {
            (format!("{}_", value), theme::cursor())
        } else {
            (value, theme::body())
        };
        lines.push(Line::from(vec![
            Span::styled(label, theme::muted()),
            Span::styled(display, style),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Username and password are required.",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        format!("  Password: minimum {} characters", MIN_PASSWORD_LENGTH),
        theme::muted(),
    )));

    let content = Paragraph::new(lines).block(panel(" User Account "));
    frame.render_widget(content, area);
}

/// Mask passwords with asterisks
fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}
