//! Read-only catalog of monkey records.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use crate::data::shipped_records;
use crate::error::{CatalogError, CatalogResult};
use crate::name::{names_match, normalize};
use crate::MonkeyRecord;

/// Immutable, ordered collection of monkey records.
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Arc<[MonkeyRecord]>,
}

impl CatalogStore {
    /// Creates a store over the given records, keeping their order.
    pub fn new(records: Vec<MonkeyRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Creates a store over the shipped table.
    pub fn shipped() -> Self {
        Self::new(shipped_records())
    }

    /// Returns all records in declaration order.
    pub fn list_all(&self) -> &[MonkeyRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by name, ignoring case and surrounding whitespace.
    ///
    /// A blank name is `NotFound` without scanning. If several records share
    /// a name, the first in declaration order wins.
    ///
    /// # Errors
    ///
    /// - `CatalogError::NotFound` if the name is blank or matches nothing
    pub fn find_by_name(&self, name: &str) -> CatalogResult<&MonkeyRecord> {
        let Some(wanted) = normalize(name) else {
            debug!("Blank name lookup");
            return Err(CatalogError::not_found(name));
        };

        self.records
            .iter()
            .find(|record| names_match(&record.name, wanted))
            .ok_or_else(|| CatalogError::not_found(wanted))
    }

    /// Picks a record uniformly at random using the thread's generator.
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyCatalog` if the store has no records
    pub fn pick_random(&self) -> CatalogResult<&MonkeyRecord> {
        self.pick_random_with(&mut rand::rng())
    }

    /// Picks a record uniformly at random using the given generator.
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyCatalog` if the store has no records
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> CatalogResult<&MonkeyRecord> {
        self.records.choose(rng).ok_or(CatalogError::EmptyCatalog)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::shipped()
    }
}
