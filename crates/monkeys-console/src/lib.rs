//! Monkeys Console - front ends for the monkey catalog
//!
//! Two ways to browse the same [`monkey_core::MonkeyService`]:
//!
//! 1. **Console**: numbered menu over stdin/stdout (`console`, `render`),
//!    plus the one-shot `list`, `show` and `random` commands (`commands`)
//! 2. **Browser**: full-screen ratatui view (`app`, `input`, `ui`)
//!
//! Both report catalog errors to the user and keep running.

pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use commands::CommandOutcome;
pub use config::Config;
pub use console::{Console, MenuChoice};
pub use error::{ConsoleError, Result};
pub use render::Palette;
