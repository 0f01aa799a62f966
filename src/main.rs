// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, Level};

mod api;
mod app;
mod config;
mod data;
mod error;
mod events;
mod ui;

use crate::api::BlockingSource;
use crate::app::App;
use crate::config::{Settings, Units};
use crate::ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "weatherwatch")]
#[command(about = "Terminal weather forecast viewer with an interactive chart")]
struct Args {
    /// City to fetch on start
    #[arg(short, long)]
    city: Option<String>,

    /// Settings file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Measurement system (overrides the settings file)
    #[arg(short, long, value_enum)]
    units: Option<Units>,

    /// Write logs to this file (the terminal is used by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log debug events
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path, args.verbose)?;
    }

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(units) = args.units {
        settings.units = units;
    }

    // The credential is required before the terminal is taken over
    let api_key = crate::config::api_key_from_env()?;
    let source = BlockingSource::new(settings.api_config(api_key))?;
    info!(base_url = %settings.base_url, units = %settings.units, "starting");

    let mut app = App::new(Box::new(source), settings.units, Theme::auto_detect());
    if let Some(city) = args.city {
        app.city_input = city;
        app.request_fetch();
    }

    run_tui(app)
}

/// Send tracing output to a file.
fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // A queued fetch blocks here, after the "Fetching" frame is on screen
        if app.run_pending_fetch() {
            continue;
        }

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
