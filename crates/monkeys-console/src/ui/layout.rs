//! Layout helpers for the catalog browser.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main application layout areas.
///
/// - Header (3 lines): title, totals and last action
/// - Content: record list (40%) beside the detail panel (60%)
/// - Footer (3 lines): key hints
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area for title and status
    pub header: Rect,
    /// Left panel for the record list
    pub list_area: Rect,
    /// Right panel for record details
    pub detail_area: Rect,
    /// Footer area for keybindings
    pub footer: Rect,
}

impl AppLayout {
    /// Creates a new AppLayout by splitting the given area.
    pub fn new(area: Rect) -> Self {
        let [header, content, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .areas(area);

        let [list_area, detail_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(content);

        Self {
            header,
            list_area,
            detail_area,
            footer,
        }
    }
}
