//! Console configuration.
//!
//! Loaded from `<config_dir>/monkeys/config.toml` when present. Every field
//! is optional; a missing default file simply yields the defaults.
//!
//! ```toml
//! show_banner = true
//! color = false
//! log_filter = "monkeys=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConsoleError, Result};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "monkeys";

/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// User-tunable console settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Print the ASCII banner when the menu starts.
    pub show_banner: bool,

    /// Use ANSI colors in console output.
    ///
    /// Unset means color only when the output is a terminal.
    pub color: Option<bool>,

    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_banner: true,
            color: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Resolves the color setting for an output stream.
    pub fn use_color(&self, output_is_terminal: bool) -> bool {
        self.color.unwrap_or(output_is_terminal)
    }

    /// Loads configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is tried and a missing file falls back to defaults.
    ///
    /// # Errors
    ///
    /// - `ConsoleError::ConfigRead` if a required file cannot be read
    /// - `ConsoleError::ConfigParse` if the file is not valid
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::from_file_or_default(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// - `ConsoleError::ConfigRead` if the file cannot be read
    /// - `ConsoleError::ConfigParse` if the file is not valid
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConsoleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// - `ConsoleError::ConfigRead` for read errors other than not-found
    /// - `ConsoleError::ConfigParse` if the file is not valid
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConsoleError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ConsoleError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
