//! One screen per wizard step

mod complete;
mod disk;
mod install;
mod locale;
mod summary;
mod user;
mod welcome;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, DiskList, InstallPhase, Step};
use crate::ui::theme;

/// Draw the content area for a step under its title
pub fn draw(frame: &mut Frame, area: Rect, step: Step, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    let title = Paragraph::new(Span::styled(step.title(), theme::heading()))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);
    let area = chunks[1];

    match step {
        Step::Welcome => welcome::draw(frame, area, app),
        Step::Locale => locale::draw(frame, area, app),
        Step::Disk => disk::draw(frame, area, app),
        Step::User => user::draw(frame, area, app),
        Step::Summary => summary::draw(frame, area, app),
        Step::Install => install::draw(frame, area, app),
        Step::Complete => complete::draw(frame, area, app),
    }
}

/// Key hints for the footer of a step
pub fn hints(step: Step, app: &App) -> Vec<&'static str> {
    match step {
        Step::Welcome => vec!["Enter Start", "Esc Exit"],
        Step::Locale => vec!["Tab Switch list", "↑↓ Navigate", "Space Choose", "Enter Continue", "Esc Back"],
        Step::Disk => match app.disks {
            DiskList::Failed(_) => vec!["r Retry", "Esc Back"],
            _ => vec!["↑↓ Navigate", "Space Select", "Enter Continue", "Esc Back"],
        },
        Step::User => vec!["Tab/↑↓ Switch field", "Enter Continue", "Esc Back"],
        Step::Summary => vec!["Enter Install", "Esc Back"],
        Step::Install => match app.install.phase {
            InstallPhase::Failed => vec!["q Quit"],
            _ => vec![],
        },
        Step::Complete => vec!["r Reboot", "q Quit"],
    }
}

/// Bordered panel with a title
pub(crate) fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(Span::styled(title, theme::heading()))
}

pub fn draw_footer(frame: &mut Frame, area: Rect, hints: &[&str]) {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, hint)| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", theme::muted()));
            }
            v.push(Span::styled("[", theme::muted()));
            // Split hint into key and action
            let parts: Vec<&str> = hint.splitn(2, ' ').collect();
            if parts.len() == 2 {
                v.push(Span::styled(parts[0], theme::key()));
                v.push(Span::styled(format!("] {}", parts[1]), theme::muted()));
            } else {
                v.push(Span::styled(*hint, theme::key()));
                v.push(Span::styled("]", theme::muted()));
            }
            v
        })
        .collect();

    let footer = Paragraph::new(ratatui::text::Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
