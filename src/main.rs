//! aqitrend - Simulated air quality trends in the terminal
//!
//! A terminal UI that shows a synthetic AQI timeline, summary statistics,
//! trend direction and weekday/hour patterns for a selected city.

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use aqitrend::app::App;
use aqitrend::cli::{Cli, StartupConfig};
use aqitrend::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Prints one report as JSON for the selected city and range
fn print_json_snapshot(config: &StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::with_startup_config(config.clone());
    let report = app.try_refresh()?;
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Runs the interactive dashboard until the user quits
fn run_tui(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(config);

    // Initial render shows the placeholder, then generate the first report
    terminal.draw(|f| ui::render_dashboard(f, &app))?;
    app.refresh_dashboard();

    // Main event loop
    loop {
        terminal.draw(|f| ui::render_dashboard(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match logging::init(config.log_file.as_deref()) {
        Ok(Some(path)) => info!(log_file = %path.display(), "logging initialised"),
        Ok(None) => {}
        Err(e) => eprintln!("warning: logging disabled: {}", e),
    }

    info!(
        city = config.city.id,
        days = config.range.days(),
        seed = ?config.seed,
        json = config.json,
        "starting aqitrend"
    );

    let result = if config.json {
        print_json_snapshot(&config)
    } else {
        run_tui(config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, "exiting with error");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
