//! TwinaOS Installer - terminal front end for the installer service

mod api;
mod app;
mod commands;
mod config;
mod constants;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::ApiClient;
use app::App;
use commands::CommandMessage;
use config::Config;

/// TwinaOS Installer
#[derive(Parser)]
#[command(name = "twina-installer")]
#[command(author = "TwinaOS Project")]
#[command(version)]
#[command(about = "TwinaOS Installer - guided installation through the installer service")]
struct Cli {
    /// Installer service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the disks offered by the installer service and exit
    Disks,
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging to file
    let log_dir = constants::data_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, constants::DIAGNOSTIC_LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("TwinaOS installer starting");

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(constants::config_file_path);
    let mut config = Config::load(&config_path);
    if let Some(server) = cli.server {
        config.service.base_url = server;
    }

    match cli.command {
        Some(Commands::DefaultConfig) => {
            print!("{}", Config::example_toml()?);
            Ok(())
        }
        Some(Commands::Disks) => list_disks(&config).await,
        None => run_tui(config).await,
    }
}

/// Print the disk list without starting the TUI
async fn list_disks(config: &Config) -> Result<()> {
    let client = ApiClient::new(&config.service)?;
    let disks = client
        .list_disks()
        .await
        .with_context(|| format!("Failed to list disks from {}", client.base_url()))?;

    if disks.is_empty() {
        println!("No disks reported by the installer service");
    }
    for disk in &disks {
        println!(
            "{:<16} {:<32} {:>12}",
            disk.device,
            disk.model_label(),
            disk.size_label()
        );
    }
    Ok(())
}

async fn run_tui(config: Config) -> Result<()> {
    let client = ApiClient::new(&config.service)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, client)
        .with_install_log(constants::data_dir().join(constants::INSTALL_LOG_FILE));

    // Create command channel
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<CommandMessage>(constants::COMMAND_CHANNEL_SIZE);
    app.set_command_sender(cmd_tx);

    // Run the app
    let result = run_app(&mut terminal, &mut app, &mut cmd_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Print log path
    if let Some(ref path) = app.install_log_path {
        println!("Installation log: {}", path.display());
    }

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cmd_rx: &mut mpsc::Receiver<CommandMessage>,
) -> Result<()> {
    // Health check and disk list
    app.start_initial_command().await?;

    // Create async event stream for responsive input
    let mut event_stream = EventStream::new();

    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS);

        tokio::select! {
            biased;  // Prioritize in order: keys, commands, timeout

            // Terminal key events (instant response)
            Some(Ok(event)) = event_stream.next() => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code).await?;
                    }
                }
            }
            // Results from background requests
            Some(msg) = cmd_rx.recv() => {
                app.handle_command_message(msg).await?;
            }
            // Timeout for spinner animation and redraw
            _ = tokio::time::sleep(timeout) => {}
        }

        // Update spinner animation
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
