//! Header and footer widgets for the catalog browser.

use crate::app::{App, Notice};
use crate::ui::theme::notice_style;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the header with title, totals and the last action's outcome.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut stats = format!(
        " | {} monkey{} | {} lookup{}",
        app.record_count(),
        if app.record_count() == 1 { "" } else { "s" },
        app.total_accesses(),
        if app.total_accesses() == 1 { "" } else { "s" },
    );
    if let Some((name, count)) = app.most_accessed() {
        stats.push_str(&format!(" | top: {name} ({count})"));
    }

    let header_line = Line::from(vec![
        Span::styled(
            "Monkeys",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - Catalog Browser"),
        Span::styled(stats, Style::default().fg(Color::DarkGray)),
        Span::raw(" | "),
        Span::styled(notice_text(&app.notice), notice_style(&app.notice)),
    ]);

    let border_style = match app.notice {
        Notice::Failed(_) => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Green),
    };

    let header = Paragraph::new(header_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(header, area);
}

/// Renders the footer bar with keybinding hints.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let sep_style = Style::default().fg(Color::DarkGray);

    let hints = vec![
        Span::styled(" ^/k", key_style),
        Span::raw(" up"),
        Span::styled("  ", sep_style),
        Span::styled("v/j", key_style),
        Span::raw(" down"),
        Span::styled("  |  ", sep_style),
        Span::styled("Enter", key_style),
        Span::raw(" look up"),
        Span::styled("  |  ", sep_style),
        Span::styled("r", key_style),
        Span::raw(" random"),
        Span::styled("  |  ", sep_style),
        Span::styled("q", key_style),
        Span::raw(" quit"),
    ];

    let footer = Paragraph::new(Line::from(hints)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Text describing the last action.
fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::Ready => "Ready".to_string(),
        Notice::Inspected(name) => format!("Looked up {name}"),
        Notice::Picked(name) => format!("Random pick: {name}"),
        Notice::Failed(message) => message.clone(),
    }
}
