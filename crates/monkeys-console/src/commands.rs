//! One-shot commands: `list`, `show <name>` and `random`.
//!
//! Each command writes its normal output to `out` and user-facing problems
//! to `err`, then returns a [`CommandOutcome`] the binary maps to an exit
//! code.

use monkey_core::{CatalogError, CatalogResult, MonkeyRecord, MonkeyService};
use std::io::Write;
use tracing::debug;

use crate::error::Result;
use crate::render::{self, Palette};

/// Whether a one-shot command did what was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    Failure,
}

impl CommandOutcome {
    /// Returns true for [`CommandOutcome::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// Prints the whole catalog as a table, or as a JSON array with `json`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list<W: Write>(
    service: &MonkeyService,
    out: &mut W,
    palette: &Palette,
    json: bool,
) -> Result<CommandOutcome> {
    if json {
        serde_json::to_writer_pretty(&mut *out, service.list_all())?;
        writeln!(out)?;
    } else {
        let table = render::catalog_table(service.list_all(), &service.access_counts(), palette);
        out.write_all(table.as_bytes())?;
    }
    Ok(CommandOutcome::Success)
}

/// Prints one record looked up by `name`.
///
/// An unknown name is reported on `err` with the input as typed.
///
/// # Errors
///
/// Returns an error if writing to either sink fails.
pub fn show<W: Write, E: Write>(
    service: &MonkeyService,
    name: &str,
    out: &mut W,
    err: &mut E,
    palette: &Palette,
) -> Result<CommandOutcome> {
    report(service, service.find_by_name(name), name, out, err, palette)
}

/// Prints a randomly chosen record.
///
/// # Errors
///
/// Returns an error if writing to either sink fails.
pub fn random<W: Write, E: Write>(
    service: &MonkeyService,
    out: &mut W,
    err: &mut E,
    palette: &Palette,
) -> Result<CommandOutcome> {
    report(service, service.pick_random(), "", out, err, palette)
}

fn report<W: Write, E: Write>(
    service: &MonkeyService,
    result: CatalogResult<&MonkeyRecord>,
    input: &str,
    out: &mut W,
    err: &mut E,
    palette: &Palette,
) -> Result<CommandOutcome> {
    match result {
        Ok(record) => {
            let details =
                render::monkey_details(record, service.access_count(&record.name), palette);
            out.write_all(details.as_bytes())?;
            Ok(CommandOutcome::Success)
        }
        Err(CatalogError::NotFound { .. }) => {
            debug!(input, "Lookup missed");
            writeln!(err, "{}", render::not_found(input, palette))?;
            Ok(CommandOutcome::Failure)
        }
        Err(e) => {
            writeln!(err, "{}", palette.warning(&format!("{e}.")))?;
            Ok(CommandOutcome::Failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_core::CatalogStore;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_show_unknown_reports_raw_input() {
        let service = MonkeyService::shipped();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let outcome = show(&service, "  king kong ", &mut out, &mut err, &Palette::plain()).unwrap();

        assert_eq!(outcome, CommandOutcome::Failure);
        assert!(out.is_empty());
        assert_eq!(text(err), "No monkey found with name '  king kong '.\n");
        assert!(service.access_counts().is_empty());
    }

    #[test]
    fn test_show_matches_loosely_and_counts() {
        let service = MonkeyService::shipped();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let outcome = show(&service, " mANDRILL ", &mut out, &mut err, &Palette::plain()).unwrap();

        assert!(outcome.is_success());
        assert!(err.is_empty());
        let out = text(out);
        assert!(out.contains("Name: Mandrill"));
        assert!(out.contains("Access count: 1"));
        assert_eq!(service.access_count("Mandrill"), 1);
    }

    #[test]
    fn test_list_json_is_camel_case_array() {
        let service = MonkeyService::shipped();
        let mut out = Vec::new();

        let outcome = list(&service, &mut out, &Palette::plain(), true).unwrap();
        assert!(outcome.is_success());

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = value.as_array().expect("a JSON array");
        assert_eq!(items.len(), 13);
        assert!(items.iter().all(|item| item.get("imageUrl").is_some()));
        assert!(items.iter().all(|item| item.get("image_url").is_none()));
        assert_eq!(items[0]["name"], "Baboon");
    }

    #[test]
    fn test_list_table_does_not_count() {
        let service = MonkeyService::shipped();
        let mut out = Vec::new();

        list(&service, &mut out, &Palette::plain(), false).unwrap();

        assert!(text(out).contains("Total monkeys: 13"));
        assert!(service.access_counts().is_empty());
    }

    #[test]
    fn test_random_on_empty_store_fails() {
        let service = MonkeyService::new(CatalogStore::new(Vec::new()));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let outcome = random(&service, &mut out, &mut err, &Palette::plain()).unwrap();

        assert_eq!(outcome, CommandOutcome::Failure);
        assert!(out.is_empty());
        assert_eq!(text(err), "No monkeys are available.\n");
    }

    #[test]
    fn test_random_prints_and_counts_once() {
        let service = MonkeyService::shipped();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let outcome = random(&service, &mut out, &mut err, &Palette::plain()).unwrap();

        assert!(outcome.is_success());
        assert!(text(out).contains("Access count: 1"));
        assert_eq!(service.access_counts().values().sum::<u64>(), 1);
    }
}
