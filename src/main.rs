// usercard - a profile card for one seeded random user
//
// Fetches a single record from randomuser.me (seed "abc" unless told
// otherwise) and shows it as a card: skeleton while loading, a generic
// message on failure, the full profile on success.
//
// Architecture:
// - Fetch (reqwest): one GET, validated into a UserProfile
// - Card: fetch-on-activation lifecycle with stale-result protection
// - TUI (ratatui): card, logs and help views; fetch outcomes arrive on
//   an mpsc channel from a spawned task
// - Headless (--print or USERCARD_NO_TUI=1): one activation, plain text

mod card;
mod cli;
mod config;
mod fetch;
mod logging;
mod profile;
mod theme;
mod tui;
mod util;

use anyhow::{Context, Result};
use card::{spawn_fetch, CardContent, CardLifecycle};
use clap::Parser;
use config::{Config, VERSION};
use fetch::ProfileClient;
use logging::{LogBuffer, LogSink};
use std::process::ExitCode;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Handle subcommands first (config --show, --path, --reset)
    if cli::handle_command(&cli)? {
        return Ok(ExitCode::SUCCESS);
    }

    // Ensure config template exists (helps users discover options)
    // Logged once tracing is up
    let template = Config::ensure_config_exists();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!();
            eprintln!("Fix the file above or regenerate it with `usercard config --reset`.");
            return Ok(ExitCode::FAILURE);
        }
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.print {
        config.enable_tui = false;
    }

    // In TUI mode logs go to the in-memory buffer (shown in the logs view);
    // headless they go to stderr so stdout carries only the card.
    let log_buffer = LogBuffer::new();
    let sink = if config.enable_tui {
        LogSink::Buffer(log_buffer.clone())
    } else {
        LogSink::Stderr
    };
    let _file_guard = logging::init(&config.logging, sink);

    match template {
        Ok(true) => tracing::info!("Wrote default config template"),
        Ok(false) => {}
        Err(e) => tracing::debug!("Config template not written: {:#}", e),
    }

    tracing::info!(
        version = VERSION,
        seed = %config.seed,
        api_url = %config.api_url,
        tui = config.enable_tui,
        "Starting usercard"
    );

    let client = ProfileClient::from_config(&config).context("Failed to build HTTP client")?;

    if config.enable_tui {
        tui::run_tui(config, client, log_buffer).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let content = fetch_card(client, &config).await;
    match &content {
        CardContent::Error(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
        _ => {
            for line in content.plain_lines() {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Headless mode: activate once, wait for the outcome, return what to show
async fn fetch_card(client: ProfileClient, config: &Config) -> CardContent {
    let (tx, mut rx) = mpsc::channel(1);
    let mut card = CardLifecycle::new();

    if let Some(generation) = card.activate() {
        spawn_fetch(client, generation, tx);
    }

    // The only sender lives in the spawned task; None means it ended
    // without reporting (e.g. it panicked).
    while let Some(outcome) = rx.recv().await {
        if card.complete(outcome) {
            break;
        }
    }

    match card.state() {
        Some(state) if !state.loading() => {
            CardContent::from_state(Some(state), &config.display_options())
        }
        _ => {
            tracing::error!("Fetch task ended without a result");
            CardContent::Error(fetch::FETCH_FAILED_MESSAGE.to_string())
        }
    }
}
