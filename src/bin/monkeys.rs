//! Monkeys - browse a catalog of monkey species from the terminal
//!
//! # Usage
//!
//! ```text
//! monkeys               # Interactive numbered menu
//! monkeys list [--json] # Print the catalog
//! monkeys show <name>   # Print one monkey
//! monkeys random        # Print a random monkey
//! monkeys browse        # Full-screen browser
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use monkey_core::MonkeyService;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use monkeys_console::app::App;
use monkeys_console::error::{ConsoleError, Result as ConsoleResult};
use monkeys_console::input::{handle_key_event, Action, Event};
use monkeys_console::render::Palette;
use monkeys_console::{commands, ui, CommandOutcome, Config, Console};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Monkeys - browse a catalog of monkey species
#[derive(Parser, Debug)]
#[command(name = "monkeys")]
#[command(about = "Browse a catalog of monkey species")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to a config file (default: <config dir>/monkeys/config.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Force colored output even when stdout is not a terminal
    #[arg(long, global = true)]
    color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every monkey with its location and population
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the details of one monkey (name is case-insensitive)
    Show {
        /// Monkey name
        name: String,
    },
    /// Print the details of a randomly chosen monkey
    Random,
    /// Open the full-screen browser
    Browse,
}

// ============================================================================
// Terminal Setup / Cleanup
// ============================================================================

fn setup_terminal() -> ConsoleResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| ConsoleError::TerminalInit(e.to_string()))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| ConsoleError::TerminalInit(e.to_string()))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| ConsoleError::TerminalInit(e.to_string()))
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> ConsoleResult<()> {
    disable_raw_mode().map_err(|e| ConsoleError::TerminalCleanup(e.to_string()))?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| ConsoleError::TerminalCleanup(e.to_string()))?;

    terminal
        .show_cursor()
        .map_err(|e| ConsoleError::TerminalCleanup(e.to_string()))?;

    Ok(())
}

// ============================================================================
// Keyboard Input Task
// ============================================================================

/// Spawns a task that polls for keyboard input and forwards it to the loop.
///
/// Crossterm polling is synchronous, so each poll runs on the blocking pool
/// with a short timeout to keep cancellation responsive.
fn spawn_keyboard_task(
    event_tx: mpsc::UnboundedSender<Event>,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if cancel_token.is_cancelled() {
                debug!("Keyboard task shutting down");
                break;
            }

            let poll_result = tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await;

            match poll_result {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if event_tx.send(Event::Key(key)).is_err() {
                        debug!("Event channel closed, keyboard task exiting");
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(width, height))) => {
                    if event_tx.send(Event::Resize(width, height)).is_err() {
                        break;
                    }
                }
                Ok(Some(_)) | Ok(None) => {}
                Err(e) => {
                    error!(error = %e, "Keyboard polling task panicked");
                    break;
                }
            }
        }
    })
}

// ============================================================================
// Browser Event Loop
// ============================================================================

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    service: &MonkeyService,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match tokio::time::timeout(tick_rate, event_rx.recv()).await {
            Ok(Some(Event::Key(key))) => match handle_key_event(key, app) {
                Action::Quit => {
                    info!("User requested quit");
                    cancel_token.cancel();
                    break;
                }
                Action::None => {}
                action => app.perform(&action, service),
            },
            Ok(Some(Event::Resize(_width, _height))) => {
                debug!("Terminal resized");
            }
            Ok(None) => {
                warn!("Event channel closed");
                break;
            }
            Err(_) => {}
        }

        if app.should_quit || cancel_token.is_cancelled() {
            cancel_token.cancel();
            break;
        }
    }

    Ok(())
}

async fn run_browser(service: &MonkeyService) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let cancel_token = CancellationToken::new();

    let mut terminal = match setup_terminal() {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to initialize terminal");
            return Err(e.into());
        }
    };

    let mut app = App::from_service(service);
    let keyboard_handle = spawn_keyboard_task(event_tx, cancel_token.clone());

    let result = run_event_loop(
        &mut terminal,
        &mut app,
        service,
        &mut event_rx,
        &cancel_token,
    )
    .await;

    cancel_token.cancel();
    let _ = tokio::time::timeout(Duration::from_millis(100), keyboard_handle).await;

    if let Err(e) = cleanup_terminal(&mut terminal) {
        error!(error = %e, "Failed to cleanup terminal");
    }

    result
}

// ============================================================================
// Logging Setup
// ============================================================================

/// Returns the log directory, respecting `XDG_STATE_HOME`.
fn get_log_dir() -> Option<PathBuf> {
    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg_state).join("monkeys"));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".local/state/monkeys"))
}

/// Opens the log file in append mode; `None` disables logging.
fn create_log_file() -> Option<std::fs::File> {
    let log_dir = get_log_dir()?;

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory {log_dir:?}: {e}");
        return None;
    }

    let log_path = log_dir.join("monkeys.log");

    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to open log file {log_path:?}: {e}");
            None
        }
    }
}

/// Logs go to a file because stdout is the user interface.
fn init_logging(config: &Config) {
    match create_log_file() {
        Some(file) => {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_filter))
                .unwrap_or_else(|_| EnvFilter::new("info"));

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .init();
        }
    }
}

fn exit_code(outcome: CommandOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    if args.no_color {
        config.color = Some(false);
    } else if args.color {
        config.color = Some(true);
    }
    // Settle auto color against stdout once; downstream sinks are not terminals.
    config.color = Some(config.use_color(io::stdout().is_terminal()));

    init_logging(&config);
    info!(command = ?args.command, "Monkeys starting");

    let service = MonkeyService::shipped();
    let palette = Palette::new(config.use_color(false));

    let code = match args.command {
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Console::new(&service, stdin, stdout)
                .with_config(&config)
                .run()?;
            ExitCode::SUCCESS
        }
        Some(Command::List { json }) => {
            exit_code(commands::list(&service, &mut io::stdout().lock(), &palette, json)?)
        }
        Some(Command::Show { name }) => exit_code(commands::show(
            &service,
            &name,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &palette,
        )?),
        Some(Command::Random) => exit_code(commands::random(
            &service,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &palette,
        )?),
        Some(Command::Browse) => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            runtime.block_on(run_browser(&service))?;
            ExitCode::SUCCESS
        }
    };

    info!("Monkeys stopped");
    Ok(code)
}
