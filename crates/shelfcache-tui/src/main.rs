//! Shelfcache - a terminal storefront for the shop's schedule and inventory.
//!
//! This application provides a fast, keyboard-driven view of the show
//! schedule and the inventory sheet, with a local cache so it keeps working
//! when the sheets cannot be reached.

mod app;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shelfcache_core::view::{InventoryMarkup, ScheduleMarkup};
use shelfcache_core::{Config, Storefront};

use app::{App, AppState};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file written inside the cache directory
const LOG_FILE_NAME: &str = "shelfcache.log";

/// Initialize the tracing subscriber for logging.
///
/// Logs go to a file so they never draw over the terminal UI. The returned
/// guard flushes the writer when dropped and must live until exit.
fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let offline_flag = args.iter().any(|a| a == "--offline");
    let dump = args.iter().any(|a| a == "--dump");

    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config ({}), using defaults", e);
            Config::default()
        }
    }
    .with_env_overrides();
    if offline_flag {
        config.offline_mode = true;
    }

    let _guard = init_tracing(&config.cache_dir()?)?;
    info!(offline = config.offline_mode, "Shelfcache starting");

    if dump {
        return dump_markup(&config).await;
    }

    // Create app before touching the terminal so setup errors print normally
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Startup always fetches; failures fall back to the cache
    app.start_refresh(true);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Shelfcache shutting down");
    Ok(())
}

/// Load both datasets and print the page fragments to stdout, one block
/// per mount point.
async fn dump_markup(config: &Config) -> Result<()> {
    let mut storefront = Storefront::new(config)?;
    let mut schedule = ScheduleMarkup::default();
    let mut inventory = InventoryMarkup::default();

    let (schedule_outcome, inventory_outcome) = storefront
        .load_all(true, &mut schedule, &mut inventory)
        .await;
    if !schedule_outcome.is_rendered() || !inventory_outcome.is_rendered() {
        warn!(?schedule_outcome, ?inventory_outcome, "Dump is missing data");
    }
    eprintln!(
        "schedule: {:?}, inventory: {:?}",
        schedule_outcome, inventory_outcome
    );

    for (mount, html) in schedule.fragments().into_iter().chain(inventory.fragments()) {
        println!("<!-- #{} -->", mount.id());
        println!("{}", html);
    }
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                // Handle input
                if handle_input(app, key, Instant::now()) {
                    return Ok(());
                }
            }
        }

        // Apply debounced input and completed background loads
        app.tick(Instant::now());
        app.check_background_tasks();

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
