//! Keyboard input handling for the catalog browser.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

// ============================================================================
// Event Types
// ============================================================================

/// Events that drive the browser loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input from the user.
    Key(KeyEvent),

    /// Terminal window resize event.
    Resize(u16, u16),
}

// ============================================================================
// Action Types
// ============================================================================

/// Actions that can result from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action required.
    None,

    /// Quit the application.
    Quit,

    /// Look up the named record through the service.
    Inspect(String),

    /// Pick a random record through the service.
    Random,
}

// ============================================================================
// Input Handler
// ============================================================================

/// Handles a keyboard event and updates navigation state.
///
/// # Key Bindings
///
/// | Key          | Action                              |
/// |--------------|-------------------------------------|
/// | `q`, `Q`     | Quit the application                |
/// | `Esc`        | Quit the application                |
/// | `Ctrl+C`     | Quit the application                |
/// | `j`, `Down`  | Select the next monkey              |
/// | `k`, `Up`    | Select the previous monkey          |
/// | `Enter`      | Look up the selected monkey         |
/// | `r`, `R`     | Pick a random monkey                |
#[must_use]
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    // Key release events arrive on some platforms
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            Action::Quit
        }

        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            Action::None
        }

        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            Action::None
        }

        KeyCode::Enter => match app.selected_record() {
            Some(record) => Action::Inspect(record.name.clone()),
            None => Action::None,
        },

        KeyCode::Char('r') | KeyCode::Char('R') => Action::Random,

        _ => Action::None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_core::MonkeyRecord;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(vec![
            MonkeyRecord::new("Baboon", "Africa & Asia", "", "", 10_000, 0.0, 0.0),
            MonkeyRecord::new("Henry", "Phoenix", "", "", 1, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        let action = handle_key_event(key_event(KeyCode::Char('q')), &mut app);
        assert_eq!(action, Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        assert_eq!(handle_key_event(key_event(KeyCode::Esc), &mut app), Action::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        let action = handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert_eq!(action, Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app();
        assert_eq!(handle_key_event(key_event(KeyCode::Char('j')), &mut app), Action::None);
        assert_eq!(app.selected_index, 1);
        assert_eq!(handle_key_event(key_event(KeyCode::Down), &mut app), Action::None);
        assert_eq!(app.selected_index, 0);
        handle_key_event(key_event(KeyCode::Up), &mut app);
        assert_eq!(app.selected_index, 1);
        handle_key_event(key_event(KeyCode::Char('k')), &mut app);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_enter_inspects_selected() {
        let mut app = app();
        app.selected_index = 1;
        let action = handle_key_event(key_event(KeyCode::Enter), &mut app);
        assert_eq!(action, Action::Inspect("Henry".to_string()));
    }

    #[test]
    fn test_enter_with_no_records_returns_none() {
        let mut app = App::new(Vec::new());
        assert_eq!(handle_key_event(key_event(KeyCode::Enter), &mut app), Action::None);
    }

    #[test]
    fn test_r_picks_random() {
        let mut app = app();
        assert_eq!(handle_key_event(key_event(KeyCode::Char('r')), &mut app), Action::Random);
        assert_eq!(handle_key_event(key_event(KeyCode::Char('R')), &mut app), Action::Random);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut app = app();
        let mut key = key_event(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(key, &mut app), Action::None);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_unhandled_key_returns_none() {
        let mut app = app();
        assert_eq!(handle_key_event(key_event(KeyCode::F(1)), &mut app), Action::None);
        assert!(!app.should_quit);
    }
}
