//! Per-name access counting.
//!
//! The tracker is the only state mutated after startup. It is backed by a
//! sharded concurrent map so increments from many threads never lose updates.

use dashmap::DashMap;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::name::normalize;

/// Mutable ledger of how often each monkey has been resolved.
///
/// Keys are canonical record names. A missing key means a count of zero.
#[derive(Debug, Default)]
pub struct AccessTracker {
    counts: DashMap<String, u64>,
}

impl AccessTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `name`, inserting it at 1 if absent.
    ///
    /// The name is trimmed but its case is kept; callers pass the canonical
    /// record name. Blank names are ignored.
    pub fn record_access(&self, name: &str) {
        let Some(key) = normalize(name) else {
            debug!("Ignoring access for blank name");
            return;
        };

        let mut count = self.counts.entry(key.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
        trace!(name = key, count = *count, "Recorded access");
    }

    /// Returns the count for `name`, or 0 if it was never accessed.
    ///
    /// Matching is exact against the stored canonical key.
    pub fn get_count(&self, name: &str) -> u64 {
        normalize(name)
            .and_then(|key| self.counts.get(key).map(|count| *count))
            .unwrap_or(0)
    }

    /// Returns an independent copy of all counts, ordered by name.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    /// Number of distinct names accessed so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing has been accessed yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
