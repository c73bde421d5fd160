//! Catalog lookups coupled with access tracking.
//!
//! `MonkeyService` is the surface front ends talk to. Every successful lookup
//! and every random pick is counted against the resolved record's canonical
//! name before the record is handed back; failed lookups are never counted.

use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::error::CatalogResult;
use crate::tracker::AccessTracker;
use crate::MonkeyRecord;

/// Catalog store plus access tracker.
///
/// Share across threads behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct MonkeyService {
    catalog: CatalogStore,
    tracker: AccessTracker,
}

impl MonkeyService {
    /// Creates a service over the given store with an empty tracker.
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            tracker: AccessTracker::new(),
        }
    }

    /// Creates a service over the shipped table.
    pub fn shipped() -> Self {
        Self::new(CatalogStore::shipped())
    }

    /// The underlying store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Returns all records in declaration order. Not counted as an access.
    pub fn list_all(&self) -> &[MonkeyRecord] {
        self.catalog.list_all()
    }

    /// Looks a record up by name and counts the access.
    ///
    /// # Errors
    ///
    /// - `CatalogError::NotFound` if the name is blank or unknown; the
    ///   tracker is left untouched
    pub fn find_by_name(&self, name: &str) -> CatalogResult<&MonkeyRecord> {
        let record = self.catalog.find_by_name(name)?;
        self.tracker.record_access(&record.name);
        debug!(name = %record.name, "Resolved monkey by name");
        Ok(record)
    }

    /// Picks a random record and counts the access.
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyCatalog` if the store has no records
    pub fn pick_random(&self) -> CatalogResult<&MonkeyRecord> {
        self.pick_random_with(&mut rand::rng())
    }

    /// Like [`pick_random`](Self::pick_random) with a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyCatalog` if the store has no records
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> CatalogResult<&MonkeyRecord> {
        let record = self.catalog.pick_random_with(rng)?;
        self.tracker.record_access(&record.name);
        debug!(name = %record.name, "Picked random monkey");
        Ok(record)
    }

    /// Access count for a canonical name; 0 if never accessed.
    pub fn access_count(&self, name: &str) -> u64 {
        self.tracker.get_count(name)
    }

    /// Snapshot of every access count.
    pub fn access_counts(&self) -> BTreeMap<String, u64> {
        self.tracker.snapshot()
    }
}
