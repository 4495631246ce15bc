//! UI rendering module

mod layout;
mod screens;
pub mod theme;
pub mod widgets;

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use layout::{centered_fixed, wizard_layout};
use widgets::StepTrack;

/// Main draw function - frames the visible step's screen
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = wizard_layout(frame.area());
    let step = app.visible.unwrap_or_else(|| app.wizard.step());

    frame.render_widget(StepTrack::new(app.indicator, step), areas.indicator);
    screens::draw(frame, areas.content, step, app);

    if let Some(ref hint) = app.hint {
        let hint = Paragraph::new(Line::from(Span::styled(format!("⚠ {}", hint), theme::hint())))
            .alignment(Alignment::Center);
        frame.render_widget(hint, areas.hint);
    }
    screens::draw_footer(frame, areas.footer, &screens::hints(step, app));

    // Blocking alert sits above the screen but below exit confirm
    if !app.show_exit_confirm {
        if let Some(ref message) = app.alert {
            draw_alert(frame, message);
        }
    }

    // Render exit confirmation popup on top of any screen
    if app.show_exit_confirm {
        draw_exit_confirm(frame);
    }
}

/// Draw a blocking message centered on screen
fn draw_alert(frame: &mut Frame, message: &str) {
    let popup_area = centered_fixed(50, 8, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::danger())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[", theme::muted()),
            Span::styled("Enter", theme::key()),
            Span::styled("] OK", theme::muted()),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::alert_border())
            .title(Span::styled(" Attention ", theme::heading())),
    );
    frame.render_widget(content, popup_area);
}

/// Draw the exit confirmation popup centered on screen
fn draw_exit_confirm(frame: &mut Frame) {
    let popup_area = centered_fixed(44, 7, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    // Draw popup content
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Exit the installer?", theme::body())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[", theme::muted()),
            Span::styled("Enter/Y", theme::key()),
            Span::styled("] Yes  [", theme::muted()),
            Span::styled("Esc/N", theme::key()),
            Span::styled("] No", theme::muted()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_focused())
            .title(Span::styled(" Exit ", theme::heading())),
    );
    frame.render_widget(content, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{app, goto};
    use crate::api::DiskDescriptor;
    use crate::app::{DiskList, Step};
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_welcome_shows_step_indicator() {
        let (app, _rx) = app();
        let screen = render(&app);
        assert!(screen.contains("Step 1 of 7"));
        assert!(screen.contains("TwinaOS"));
    }

    #[tokio::test]
    async fn test_disk_failure_shows_retry_instruction() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::Disk);
        app.disks = DiskList::Failed(crate::commands::errors::ParsedError {
            summary: "Loading disks: installer service unreachable".to_string(),
            detail: None,
            suggestion: "Check the service".to_string(),
        });
        let screen = render(&app);
        assert!(screen.contains("Step 3 of 7"));
        assert!(screen.contains("installer service unreachable"));
        assert!(screen.contains("Press r to retry"));
    }

    #[tokio::test]
    async fn test_alert_rendered_over_screen() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::User);
        app.alert = Some("Passwords do not match.".to_string());
        let screen = render(&app);
        assert!(screen.contains("Passwords do not match."));
        assert!(screen.contains("Attention"));
    }

    #[tokio::test]
    async fn test_user_screen_masks_passwords() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::User);
        app.form.password = "hunter22".to_string();
        let screen = render(&app);
        assert!(!screen.contains("hunter22"));
        assert!(screen.contains("********"));
    }

    #[tokio::test]
    async fn test_step_title_heads_content() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::Disk);
        assert!(render(&app).contains("Installation Disk"));
        goto(&mut app, Step::Locale);
        assert!(render(&app).contains("Language & Region"));
    }

    #[tokio::test]
    async fn test_reselected_disk_has_single_marker() {
        let (mut app, _rx) = app();
        goto(&mut app, Step::Disk);
        let disk = |device: &str| DiskDescriptor {
            device: device.to_string(),
            model: None,
            size: 1 << 30,
        };
        app.disks = DiskList::Loaded(vec![disk("/dev/sda"), disk("/dev/sdb")]);

        for key in [KeyCode::Char(' '), KeyCode::Down, KeyCode::Char(' ')] {
            app.handle_key(key).await.unwrap();
        }

        let screen = render(&app);
        assert_eq!(screen.matches('●').count(), 1);
        let marked = screen.lines().find(|row| row.contains('●')).unwrap();
        assert!(marked.contains("/dev/sdb"));
        assert!(!marked.contains("/dev/sda"));
    }
}
