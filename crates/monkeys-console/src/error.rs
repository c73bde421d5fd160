//! Error types for the monkeys console.
//!
//! These cover what can go wrong outside the catalog itself: terminal setup
//! for the browser, loading configuration, and plain I/O on the console.
//! Catalog conditions (`NotFound`, `EmptyCatalog`) are not errors here; the
//! front ends report them to the user and keep going.
//!
//! **Panic-Free Policy:** No `.unwrap()`, `.expect()`, `panic!()`,
//! `unreachable!()`, or `todo!()` outside tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Console Error Type
// ============================================================================

/// Console and browser errors.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Failed to initialize the terminal.
    ///
    /// Raw mode or the alternate screen could not be enabled, usually
    /// because stdout is not a TTY.
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    /// Failed to cleanup/restore the terminal.
    ///
    /// Running `reset` can help recover.
    #[error("Failed to restore terminal: {0}")]
    TerminalCleanup(String),

    /// The configuration file could not be read.
    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for `Config`.
    #[error("Invalid config {path:?}: {source}")]
    ConfigParse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Catalog JSON could not be written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error passthrough.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Convenience Result type alias for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

// ============================================================================
// Tests
// ============================================================================
