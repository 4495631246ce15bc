//! Common layout helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered box with specified percentage width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Create a centered box with fixed width and height
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Wizard frame areas
pub struct WizardAreas {
    pub indicator: Rect,
    pub content: Rect,
    pub hint: Rect,
    pub footer: Rect,
}

/// Split the screen into step indicator, content, hint line and footer
pub fn wizard_layout(area: Rect) -> WizardAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Step indicator
            Constraint::Min(10),    // Content
            Constraint::Length(1),  // Hint
            Constraint::Length(2),  // Footer
        ])
        .split(centered_rect(90, 95, area));
    WizardAreas {
        indicator: chunks[0],
        content: chunks[1],
        hint: chunks[2],
        footer: chunks[3],
    }
}

/// Split content area into two side-by-side columns
pub fn two_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split content area for the install screen (status + gauge + log)
pub fn install_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Gauge
            Constraint::Min(5),    // Log
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
