//! Browser state for the full-screen catalog view.
//!
//! The app holds a copy of the catalog records (in declaration order) and the
//! most recent access-count snapshot. It never touches the tracker directly;
//! lookups and random picks go through the service in [`App::perform`].
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

use monkey_core::{CatalogError, MonkeyRecord, MonkeyService};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::input::Action;

// ============================================================================
// Notice
// ============================================================================

/// Outcome of the last user action, shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notice {
    /// Nothing has happened yet.
    #[default]
    Ready,

    /// A record was looked up by name.
    Inspected(String),

    /// A record was picked at random.
    Picked(String),

    /// A catalog operation failed.
    Failed(String),
}

// ============================================================================
// Application
// ============================================================================

/// Core application state for the catalog browser.
#[derive(Debug, Clone)]
pub struct App {
    /// Catalog records in declaration order.
    pub records: Vec<MonkeyRecord>,

    /// Latest access counts keyed by canonical name.
    pub counts: BTreeMap<String, u64>,

    /// Index of the currently selected record.
    pub selected_index: usize,

    /// Flag indicating the application should quit.
    pub should_quit: bool,

    /// Result of the last action.
    pub notice: Notice,
}

impl App {
    /// Creates an app over the given records with no counts.
    pub fn new(records: Vec<MonkeyRecord>) -> Self {
        Self {
            records,
            counts: BTreeMap::new(),
            selected_index: 0,
            should_quit: false,
            notice: Notice::Ready,
        }
    }

    /// Creates an app from the service's catalog and current counts.
    pub fn from_service(service: &MonkeyService) -> Self {
        let mut app = Self::new(service.list_all().to_vec());
        app.refresh_counts(service.access_counts());
        app
    }

    /// Replaces the count snapshot.
    pub fn refresh_counts(&mut self, counts: BTreeMap<String, u64>) {
        self.counts = counts;
    }

    /// Returns the currently selected record, if any.
    pub fn selected_record(&self) -> Option<&MonkeyRecord> {
        self.records.get(self.selected_index)
    }

    /// Selects the record with exactly this canonical name.
    ///
    /// Returns false (and keeps the selection) if no record has that name.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.records.iter().position(|r| r.name == name) {
            Some(index) => {
                self.selected_index = index;
                true
            }
            None => false,
        }
    }

    /// Navigates to the next record (downward), wrapping around if needed.
    pub fn select_next(&mut self) {
        let count = self.records.len();
        if count == 0 {
            self.selected_index = 0;
            return;
        }
        self.selected_index = (self.selected_index.saturating_add(1)) % count;
    }

    /// Navigates to the previous record (upward), wrapping around if needed.
    pub fn select_previous(&mut self) {
        let count = self.records.len();
        if count == 0 {
            self.selected_index = 0;
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count.saturating_sub(1);
        } else {
            self.selected_index = self.selected_index.saturating_sub(1);
        }
    }

    /// Sets the quit flag to true, signaling the application should exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Number of records in the catalog.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Access count for a canonical name in the current snapshot.
    pub fn count_for(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Sum of all access counts.
    pub fn total_accesses(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Highest single access count (0 when nothing was accessed).
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// The most accessed record; ties go to the earliest in the catalog.
    pub fn most_accessed(&self) -> Option<(&str, u64)> {
        let max = self.max_count();
        if max == 0 {
            return None;
        }
        self.records
            .iter()
            .find(|r| self.count_for(&r.name) == max)
            .map(|r| (r.name.as_str(), max))
    }

    /// Executes a catalog action through the service and refreshes counts.
    ///
    /// Catalog errors are stored in [`notice`](Self::notice) instead of
    /// being returned.
    pub fn perform(&mut self, action: &Action, service: &MonkeyService) {
        match action {
            Action::Inspect(name) => match service.find_by_name(name) {
                Ok(record) => {
                    info!(name = %record.name, "Inspected monkey");
                    let canonical = record.name.clone();
                    self.select_by_name(&canonical);
                    self.notice = Notice::Inspected(canonical);
                }
                Err(e) => self.fail(&e),
            },
            Action::Random => match service.pick_random() {
                Ok(record) => {
                    info!(name = %record.name, "Picked random monkey");
                    let canonical = record.name.clone();
                    self.select_by_name(&canonical);
                    self.notice = Notice::Picked(canonical);
                }
                Err(e) => self.fail(&e),
            },
            Action::Quit | Action::None => return,
        }
        self.refresh_counts(service.access_counts());
    }

    fn fail(&mut self, error: &CatalogError) {
        debug!(error = %error, "Browser action failed");
        self.notice = Notice::Failed(error.to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================
