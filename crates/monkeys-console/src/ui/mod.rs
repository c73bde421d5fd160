//! UI rendering module for the catalog browser.
//!
//! # Layout Structure
//!
//! ```text
//! +--------------------------------------------------+
//! |  Header: Title, totals, last action              |  <- 3 lines
//! +-------------------+------------------------------+
//! | Monkey List (40%) |  Detail Panel (60%)          |
//! | >   2 Baboon      |  Baboon                      |
//! |     0 Henry       |  Location: Africa & Asia     |
//! +-------------------+------------------------------+
//! |  Footer: Keybinding Hints                        |  <- 3 lines
//! +--------------------------------------------------+
//! ```

pub mod detail_panel;
pub mod layout;
pub mod monkey_list;
pub mod status_bar;
pub mod theme;

use crate::app::App;
use layout::AppLayout;
use ratatui::Frame;

pub use detail_panel::render_detail_panel;
pub use monkey_list::render_monkey_list;
pub use status_bar::{render_footer, render_header};

/// Renders the complete browser interface.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header, app);
    render_footer(frame, layout.footer);
    render_monkey_list(frame, layout.list_area, app);

    let selected = app.selected_record();
    let count = selected.map_or(0, |r| app.count_for(&r.name));
    let total = app.total_accesses();
    let share = if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    };
    render_detail_panel(frame, layout.detail_area, selected, count, share);
}
