//! Installer styles, named by what they mark on screen

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Cyan;
const KEY: Color = Color::Blue;
const OK: Color = Color::Green;
const CAUTION: Color = Color::Yellow;
const DANGER: Color = Color::Red;
const FOREGROUND: Color = Color::White;
const MUTED: Color = Color::DarkGray;

/// Panel titles, table headers and the logo
pub fn heading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn body() -> Style {
    Style::default().fg(FOREGROUND)
}

/// Explanations, labels and footer brackets
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Row or field under the cursor
pub fn cursor() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// The disk, language or timezone the user has picked (the `●` row)
pub fn chosen() -> Style {
    Style::default().fg(OK).add_modifier(Modifier::BOLD)
}

// Step track

pub fn step_done() -> Style {
    Style::default().fg(OK)
}

pub fn step_current() -> Style {
    cursor()
}

pub fn step_upcoming() -> Style {
    muted()
}

// Service and installation status

pub fn status_ok() -> Style {
    Style::default().fg(OK)
}

pub fn status_failed() -> Style {
    Style::default().fg(DANGER)
}

/// Spinners and other work still running
pub fn status_busy() -> Style {
    Style::default().fg(KEY)
}

/// Non-blocking notices under the content panel
pub fn hint() -> Style {
    Style::default().fg(CAUTION)
}

/// Data-loss warnings and blocking alerts
pub fn danger() -> Style {
    Style::default().fg(DANGER).add_modifier(Modifier::BOLD)
}

/// `ERROR:` lines in the installation log
pub fn log_error() -> Style {
    Style::default().fg(DANGER)
}

pub fn panel_border() -> Style {
    Style::default().fg(ACCENT)
}

pub fn panel_border_focused() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn alert_border() -> Style {
    Style::default().fg(DANGER)
}

/// Key names in the footer and popups
pub fn key() -> Style {
    Style::default().fg(KEY)
}

pub fn gauge_fill() -> Style {
    Style::default().fg(ACCENT).bg(Color::Black)
}
