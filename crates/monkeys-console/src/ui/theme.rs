//! Shared theme utilities for the catalog browser.

use crate::app::Notice;
use ratatui::style::{Color, Modifier, Style};

/// Returns the color for an access count relative to the current maximum.
///
/// - DarkGray: never accessed
/// - Green: the most accessed record(s)
/// - White: everything in between
pub fn count_color(count: u64, max: u64) -> Color {
    if count == 0 {
        Color::DarkGray
    } else if count >= max {
        Color::Green
    } else {
        Color::White
    }
}

/// Returns the style for the header notice.
pub fn notice_style(notice: &Notice) -> Style {
    match notice {
        Notice::Ready => Style::default().fg(Color::DarkGray),
        Notice::Inspected(_) => Style::default().fg(Color::Cyan),
        Notice::Picked(_) => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Notice::Failed(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
