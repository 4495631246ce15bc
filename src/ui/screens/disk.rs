//! Installation disk selection

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Wrap},
    Frame,
};

use super::panel;
use crate::api::DiskDescriptor;
use crate::app::{App, DiskList};
use crate::commands::errors::ParsedError;
use crate::ui::layout::centered_fixed;
use crate::ui::theme;
use crate::ui::widgets::Spinner;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    match &app.disks {
        DiskList::Loading => {
            frame.render_widget(panel(" Available Disks "), area);
            let spinner_area = centered_fixed(24, 1, area);
            frame.render_widget(
                Spinner::new(app.spinner_state).label("Loading disks..."),
                spinner_area,
            );
        }
        DiskList::Failed(error) => draw_error(frame, area, error),
        DiskList::Loaded(disks) if disks.is_empty() => {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No disks found!", theme::hint())),
                Line::from(""),
                Line::from(Span::styled(
                    "The installer service did not report any usable disk.",
                    theme::muted(),
                )),
            ])
            .alignment(Alignment::Center)
            .block(panel(" Available Disks "));
            frame.render_widget(message, area);
        }
        DiskList::Loaded(disks) => {
            draw_table(frame, area, disks, app.disk_cursor, app.wizard.selected_disk.as_deref())
        }
    }
}

fn draw_table(
    frame: &mut Frame,
    area: Rect,
    disks: &[DiskDescriptor],
    cursor: usize,
    selected: Option<&str>,
) {
    let header = Row::new(vec!["", "Device", "Model", "Size"])
        .style(theme::heading())
        .bottom_margin(1);

    let rows: Vec<Row> = disks
        .iter()
        .enumerate()
        .map(|(i, disk)| {
            let is_selected = selected == Some(disk.device.as_str());
            let marker = if is_selected { "●" } else { " " };
            let style = if i == cursor {
                theme::cursor()
            } else if is_selected {
                theme::chosen()
            } else {
                theme::body()
            };
            Row::new(vec![
                marker.to_string(),
                disk.device.clone(),
                disk.model_label().to_string(),
                disk.size_label(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(panel(" Available Disks "));

    frame.render_widget(table, area);
}

fn draw_error(frame: &mut Frame, area: Rect, error: &ParsedError) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("✗ {}", error.summary), theme::status_failed())),
    ];
    if let Some(ref detail) = error.detail {
        lines.push(Line::from(Span::styled(detail.as_str(), theme::muted())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(error.suggestion.as_str(), theme::muted())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press r to retry.",
        theme::hint(),
    )));

    let message = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel(" Available Disks ").border_style(theme::status_failed()));
    frame.render_widget(message, area);
}
