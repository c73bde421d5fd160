//! Plain-text rendering for the console menu and one-shot commands.
//!
//! Everything here returns `String`s so the menu loop, the CLI subcommands
//! and the tests share one formatting path. Styling goes through [`Palette`],
//! which emits ANSI sequences only when color is enabled.

use crossterm::style::{Color, Stylize};
use monkey_core::MonkeyRecord;
use std::collections::BTreeMap;

/// Title shown next to the banner art.
pub const APP_TITLE: &str = "Monkeys";

const BANNER_ART: [&str; 8] = [
    r#"   __,="``"=.__"#,
    r"  /  _       _  \",
    r" /  (o)     (o)  \",
    r"|      ___         |",
    r"|    (____)        |",
    r" \                /",
    r"  `._  \___/  _.'",
    r"     `-.___.-'",
];

const FACE_ART: [&str; 7] = [
    r"  .-''''-.",
    r" /  .--.  \",
    r"|  /    \  |",
    r"| |  ()  | |",
    r"|  \ -- /  |",
    r" \  '--'  /",
    r"  `-.__.-'",
];

// ============================================================================
// Palette
// ============================================================================

/// Console styling switch. The default is plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    /// Creates a palette; `color = false` produces plain text.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A palette that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Whether ANSI styling is enabled.
    pub fn is_color(&self) -> bool {
        self.color
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    /// Titles and menu headings.
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, Color::Cyan, true)
    }

    /// Field labels in detail views.
    pub fn label(&self, text: &str) -> String {
        self.paint(text, Color::DarkGrey, true)
    }

    /// Recoverable problems reported to the user.
    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Color::Yellow, false)
    }

    /// Highlighted values such as access counts.
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Color::Green, false)
    }
}

// ============================================================================
// Banner and Menu
// ============================================================================

/// ASCII banner printed when the menu starts.
pub fn banner(palette: &Palette) -> String {
    let mut out = String::from("\n");
    let title_row = 4;
    for (row, line) in BANNER_ART.iter().enumerate() {
        if row == title_row {
            out.push_str(&format!("{line}  {}\n", palette.heading(APP_TITLE)));
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

/// Menu options, without the trailing prompt.
pub fn menu(palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", palette.heading("Select an option:")));
    out.push_str("1) List all monkeys\n");
    out.push_str("2) Get details by name\n");
    out.push_str("3) Get a random monkey\n");
    out.push_str("4) Exit\n");
    out
}

// ============================================================================
// Catalog Table
// ============================================================================

/// Renders the catalog as an aligned table with access counts.
///
/// `counts` is a tracker snapshot; missing names show 0.
pub fn catalog_table(
    records: &[MonkeyRecord],
    counts: &BTreeMap<String, u64>,
    palette: &Palette,
) -> String {
    let name_width = column_width("Name", records.iter().map(|r| r.name.as_str()));
    let location_width = column_width("Location", records.iter().map(|r| r.location.as_str()));
    let total_width = name_width + location_width + 12 + 10 + 9;
    let rule = "-".repeat(total_width);

    let mut out = String::from("\n");
    out.push_str(&format!("Total monkeys: {}\n", records.len()));
    out.push_str(&rule);
    out.push('\n');
    let header = format!(
        "{:<name_width$} | {:<location_width$} | {:>12} | {:>10}",
        "Name", "Location", "Population", "Accesses"
    );
    out.push_str(&format!("{}\n", palette.heading(&header)));
    out.push_str(&rule);
    out.push('\n');

    for record in records {
        let count = counts.get(&record.name).copied().unwrap_or(0);
        let count_cell = format!("{count:>10}");
        let count_cell = if count > 0 {
            palette.accent(&count_cell)
        } else {
            count_cell
        };
        out.push_str(&format!(
            "{:<name_width$} | {:<location_width$} | {:>12} | {}\n",
            record.name, record.location, record.population, count_cell
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push('\n');
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

// ============================================================================
// Details
// ============================================================================

/// Renders one record with the monkey face and its access count.
pub fn monkey_details(record: &MonkeyRecord, access_count: u64, palette: &Palette) -> String {
    let mut out = String::from("\n");
    for line in FACE_ART {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    let fields = [
        ("Name:", record.name.clone()),
        ("Location:", record.location.clone()),
        ("Population:", record.population.to_string()),
        ("Details:", record.details.clone()),
        ("Image URL:", record.image_url.clone()),
        ("Coordinates:", record.coordinates_display()),
    ];
    for (label, value) in fields {
        out.push_str(&format!("{} {value}\n", palette.label(label)));
    }
    out.push_str(&format!(
        "{} {}\n",
        palette.label("Access count:"),
        palette.accent(&access_count.to_string())
    ));
    out.push('\n');
    out
}

/// Message for a name that resolved to nothing.
pub fn not_found(name: &str, palette: &Palette) -> String {
    palette.warning(&format!("No monkey found with name '{name}'."))
}
