mod api;
mod app;
mod config;
mod feed;
#[macro_use]
mod logging;
mod terminal;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

/// Chirp - a keyboard-driven tweet reader for the terminal
#[derive(Parser)]
#[command(name = "chirp")]
#[command(about = "A terminal-based tweet reader")]
#[command(version)]
struct Cli {
    /// Server URL to fetch tweets from
    #[arg(long, short, env = "CHIRP_SERVER_URL")]
    server: Option<String>,

    /// Only show tweets from this username
    #[arg(long, short)]
    user: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,
}

// Load environment variables from .env file
// This allows CHIRP_SERVER_URL to be set without command-line args
fn load_env() {
    let _ = dotenv::dotenv();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Load environment variables from .env file
    load_env();

    // Initialize logging system
    let log_config = if cli.verbose {
        logging::LogConfig::verbose()
    } else if cli.quiet {
        logging::LogConfig::minimal()
    } else {
        logging::LogConfig::default()
    };
    logging::init_logging(&log_config)?;

    // Initialize terminal
    let mut tui = terminal::init()?;

    // Initialize configuration manager
    let config_manager = config::ConfigManager::new()?;

    // Determine server URL based on CLI args, env vars, config file, and defaults
    let server_url = config_manager.determine_server_url(cli.server)?;
    log::info!("Using server: {}", server_url);

    // Create app with determined server URL and logging config
    let mut app = App::with_server_url(server_url, config_manager);
    app.log_config = log_config;

    // The command line filter wins over the saved preference
    if let Some(user) = cli.user {
        app.username_filter = user.trim().to_string();
    } else {
        app.load_filter_preference();
    }

    // Main event loop
    while app.running {
        // Render UI (a queued load keeps the loading state visible on
        // the frame drawn before the request goes out)
        tui.draw(|frame| ui::render(&mut app, frame))?;

        // Check if we need to perform a pending load (after UI has rendered loading state)
        if app.pending_load {
            app.pending_load = false;
            app.load_feed().await?;
            app.load_profile().await?;
        }

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            // Filter out mouse events - keyboard-only navigation
            if matches!(event, Event::Mouse(_)) {
                continue;
            }

            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    // Log key event with modal context
                    let modal_context = if app.show_help {
                        "help_open"
                    } else if app.filter_prompt.open {
                        "filter_prompt"
                    } else {
                        "feed_view"
                    };
                    log_key_event!(app.log_config, "key={:?}, context={}", key.code, modal_context);

                    app.handle_key_event(key)?;
                }
            }
        }
    }

    // Restore terminal
    terminal::restore()?;

    Ok(())
}
