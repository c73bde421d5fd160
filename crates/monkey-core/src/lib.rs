//! Monkey Core - catalog and access tracking for the monkeys console
//!
//! This crate provides the in-memory catalog of monkey records and the
//! per-name access counter shared by the console and the browser.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

pub mod catalog;
pub mod data;
pub mod error;
pub mod name;
pub mod record;
pub mod service;
pub mod tracker;

// Re-exports for convenience
pub use catalog::CatalogStore;
pub use data::{shipped_records, SHIPPED_COUNT};
pub use error::{CatalogError, CatalogResult};
pub use record::MonkeyRecord;
pub use service::MonkeyService;
pub use tracker::AccessTracker;
