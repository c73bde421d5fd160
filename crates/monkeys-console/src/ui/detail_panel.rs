//! Record detail panel for the catalog browser.

use monkey_core::MonkeyRecord;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Renders the selected record into the right panel.
///
/// `share` is the record's fraction of all accesses, as a percentage.
pub fn render_detail_panel(
    frame: &mut Frame,
    area: Rect,
    record: Option<&MonkeyRecord>,
    access_count: u64,
    share: f64,
) {
    let block = Block::default().title(" Details ").borders(Borders::ALL);

    match record {
        Some(record) => {
            let lines = build_detail_lines(record, access_count, share);
            let paragraph = Paragraph::new(lines)
                .block(block.border_style(Style::default().fg(Color::Cyan)))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
        None => {
            let paragraph =
                Paragraph::new("").block(block.border_style(Style::default().fg(Color::DarkGray)));
            frame.render_widget(paragraph, area);
        }
    }
}

fn build_detail_lines(record: &MonkeyRecord, access_count: u64, share: f64) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", label_style),
            Span::styled(
                record.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Location:    ", label_style),
            Span::styled(record.location.clone(), value_style),
        ]),
        Line::from(vec![
            Span::styled("  Population:  ", label_style),
            Span::styled(record.population.to_string(), value_style),
        ]),
        Line::from(vec![
            Span::styled("  Coordinates: ", label_style),
            Span::styled(record.coordinates_display(), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Accesses ", label_style),
            Span::styled(build_progress_bar(share, 20), Style::default().fg(Color::Green)),
            Span::styled(
                format!(" ({access_count})"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("  {}", record.details),
            value_style,
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Image: ", label_style),
            Span::styled(record.image_url.clone(), Style::default().fg(Color::DarkGray)),
        ]),
    ]
}

/// Builds an ASCII bar for a percentage.
fn build_progress_bar(percentage: f64, width: usize) -> String {
    let safe_percentage = if percentage.is_nan() || percentage.is_infinite() || percentage < 0.0 {
        0.0
    } else {
        percentage
    };

    let filled = ((safe_percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let empty = width.saturating_sub(filled);

    format!(
        "[{}{}] {:.0}%",
        "=".repeat(filled),
        " ".repeat(empty),
        safe_percentage
    )
}
