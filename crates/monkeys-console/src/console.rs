//! Interactive menu loop.
//!
//! The loop is generic over its input and output so it can run against
//! stdin/stdout in the binary and against in-memory buffers in tests.
//! Catalog errors are reported inline and never end the loop; only I/O
//! failures on the console itself propagate.

use monkey_core::{CatalogError, MonkeyRecord, MonkeyService};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::render::{self, Palette};

// ============================================================================
// Menu Choices
// ============================================================================

/// An option picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print the whole catalog.
    List,
    /// Prompt for a name and print that record.
    Details,
    /// Print a randomly chosen record.
    Random,
    /// Leave the loop.
    Exit,
}

impl MenuChoice {
    /// Parses trimmed user input. Accepts the menu digit or a word alias.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "list" | "ls" => Some(Self::List),
            "2" | "show" | "details" => Some(Self::Details),
            "3" | "random" => Some(Self::Random),
            "4" | "exit" | "quit" | "q" => Some(Self::Exit),
            _ => None,
        }
    }
}

// ============================================================================
// Console
// ============================================================================

/// The menu-driven console front end.
pub struct Console<'a, R, W> {
    service: &'a MonkeyService,
    input: R,
    output: W,
    palette: Palette,
    show_banner: bool,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Creates a console with default settings.
    pub fn new(service: &'a MonkeyService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            palette: Palette::default(),
            show_banner: true,
        }
    }

    /// Applies banner and color settings from `config`.
    ///
    /// The output sink is not assumed to be a terminal, so an unset
    /// `color` means plain text.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.palette = Palette::new(config.use_color(false));
        self.show_banner = config.show_banner;
        self
    }

    /// Overrides the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Consumes the console and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        info!("Console started");

        if self.show_banner {
            let banner = render::banner(&self.palette);
            self.output.write_all(banner.as_bytes())?;
        }

        loop {
            self.prompt_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                writeln!(self.output)?;
                break;
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                writeln!(self.output, "Please enter a choice.")?;
                continue;
            }

            match MenuChoice::parse(trimmed) {
                Some(MenuChoice::List) => self.list_monkeys()?,
                Some(MenuChoice::Details) => {
                    write!(self.output, "Enter monkey name: ")?;
                    self.output.flush()?;
                    // End of input reads as a blank name.
                    let name = self.read_line()?.unwrap_or_default();
                    self.show_by_name(&name)?;
                }
                Some(MenuChoice::Random) => self.show_random()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                None => {
                    debug!(input = trimmed, "Unknown menu option");
                    writeln!(self.output, "Unknown option.")?;
                }
            }
        }

        self.output.flush()?;
        info!("Console stopped");
        Ok(())
    }

    fn prompt_menu(&mut self) -> Result<()> {
        let menu = render::menu(&self.palette);
        self.output.write_all(menu.as_bytes())?;
        write!(self.output, "Choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its line terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Prints the catalog table with current access counts.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if writing fails.
    pub fn list_monkeys(&mut self) -> Result<()> {
        let counts = self.service.access_counts();
        let table = render::catalog_table(self.service.list_all(), &counts, &self.palette);
        self.output.write_all(table.as_bytes())?;
        Ok(())
    }

    /// Looks `name` up and prints the record, or reports that it is missing.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if writing fails.
    pub fn show_by_name(&mut self, name: &str) -> Result<()> {
        match self.service.find_by_name(name) {
            Ok(record) => self.write_details(record),
            Err(e) => self.report(&e, name),
        }
    }

    /// Picks a random record and prints it.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if writing fails.
    pub fn show_random(&mut self) -> Result<()> {
        match self.service.pick_random() {
            Ok(record) => self.write_details(record),
            Err(e) => self.report(&e, ""),
        }
    }

    fn write_details(&mut self, record: &MonkeyRecord) -> Result<()> {
        let count = self.service.access_count(&record.name);
        let details = render::monkey_details(record, count, &self.palette);
        self.output.write_all(details.as_bytes())?;
        Ok(())
    }

    fn report(&mut self, error: &CatalogError, input: &str) -> Result<()> {
        debug!(error = %error, "Catalog lookup failed");
        let message = match error {
            CatalogError::NotFound { .. } => render::not_found(input, &self.palette),
            CatalogError::EmptyCatalog => self.palette.warning(&format!("{error}.")),
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_core::CatalogStore;

    fn run_session(service: &MonkeyService, input: &str) -> String {
        let mut console = Console::new(service, input.as_bytes(), Vec::new())
            .with_palette(Palette::plain());
        console.show_banner = false;
        console.run().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Details));
        assert_eq!(MenuChoice::parse("RANDOM"), Some(MenuChoice::Random));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit_says_goodbye() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "4\n");
        assert!(out.contains("Choice: "));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "");
        assert!(out.contains("Choice: "));
        assert!(!out.contains("Goodbye."));
    }

    #[test]
    fn test_blank_and_unknown_choices() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "\n   \nbanana\n4\n");
        assert_eq!(out.matches("Please enter a choice.").count(), 2);
        assert_eq!(out.matches("Unknown option.").count(), 1);
    }

    #[test]
    fn test_details_by_name_counts_access() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "2\nmandrill\n2\nMANDRILL\n4\n");
        assert!(out.contains("Enter monkey name: "));
        assert!(out.contains("Name: Mandrill"));
        assert!(out.contains("Access count: 1"));
        assert!(out.contains("Access count: 2"));
        assert_eq!(service.access_count("Mandrill"), 2);
    }

    #[test]
    fn test_details_not_found_uses_raw_input() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "2\nKing Kong\n4\n");
        assert!(out.contains("No monkey found with name 'King Kong'."));
        assert!(service.access_counts().is_empty());
    }

    #[test]
    fn test_details_with_input_closed_is_not_found() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "2\n");
        assert!(out.contains("No monkey found with name ''."));
        assert!(service.access_counts().is_empty());
    }

    #[test]
    fn test_random_counts_exactly_once() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "3\n4\n");
        assert!(out.contains("Access count: 1"));
        assert_eq!(service.access_counts().values().sum::<u64>(), 1);
    }

    #[test]
    fn test_random_on_empty_catalog_is_reported() {
        let service = MonkeyService::new(CatalogStore::new(Vec::new()));
        let out = run_session(&service, "3\n4\n");
        assert!(out.contains("No monkeys are available."));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_list_shows_counts_without_counting() {
        let service = MonkeyService::shipped();
        service.find_by_name("Henry").unwrap();
        let out = run_session(&service, "1\n4\n");
        assert!(out.contains("Total monkeys: 13"));
        let henry = out.lines().find(|l| l.starts_with("Henry")).unwrap();
        assert!(henry.trim_end().ends_with('1'));
        assert_eq!(service.access_count("Henry"), 1);
    }

    #[test]
    fn test_windows_line_endings() {
        let service = MonkeyService::shipped();
        let out = run_session(&service, "2\r\nBaboon\r\n4\r\n");
        assert!(out.contains("Name: Baboon"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_banner_from_config() {
        let service = MonkeyService::shipped();
        let config = Config {
            show_banner: true,
            color: Some(false),
            log_filter: "info".to_string(),
        };
        let mut console = Console::new(&service, "4\n".as_bytes(), Vec::new()).with_config(&config);
        console.run().unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains(render::APP_TITLE));
        assert!(!out.contains('\u{1b}'));
    }
}
