//! Monkey list widget for the catalog browser.
//!
//! Shows every record in catalog order with its current access count.

use crate::app::App;
use crate::ui::theme::count_color;
use monkey_core::MonkeyRecord;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the record list in the left panel.
///
/// Each row is `> [count] [name]  [location]`; the count is color-coded
/// against the most accessed record.
pub fn render_monkey_list(frame: &mut Frame, area: Rect, app: &App) {
    if app.records.is_empty() {
        render_empty_state(frame, area);
        return;
    }

    let max = app.max_count();
    let name_width = usize::from(area.width).saturating_sub(12).clamp(8, 24);

    let items: Vec<ListItem> = app
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            create_monkey_item(
                record,
                app.count_for(&record.name),
                max,
                idx == app.selected_index,
                name_width,
            )
        })
        .collect();

    let title = format!(" Monkeys ({}) ", app.record_count());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(list, area);
}

fn create_monkey_item(
    record: &MonkeyRecord,
    count: u64,
    max: u64,
    is_selected: bool,
    name_width: usize,
) -> ListItem<'static> {
    let spans = vec![
        Span::styled(
            if is_selected { ">" } else { " " },
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{count:>4} "),
            Style::default()
                .fg(count_color(count, max))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:<name_width$}", truncate_string(&record.name, name_width)),
            Style::default().fg(Color::White),
        ),
        Span::raw(" "),
        Span::styled(
            truncate_string(&record.location, 16),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let style = if is_selected {
        Style::default().bg(Color::Rgb(30, 30, 40))
    } else {
        Style::default()
    };

    ListItem::new(Line::from(spans)).style(style)
}

/// Truncates a string to `max_len` characters, marking the cut with "...".
fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The catalog is empty",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'q' to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" No Monkeys ")
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(paragraph, area);
}
