// Main entry point
use clap::Parser;
use colored::Colorize;
use mt_compare::application::compare::translate_all;
use mt_compare::application::session::{SessionState, TranslationSession};
use mt_compare::domain::error::CompareError;
use mt_compare::domain::model::TranslationResults;
use mt_compare::infrastructure::config::{self, load_config, Config};
use mt_compare::infrastructure::network::client::check_health;
use mt_compare::interfaces::cli::Cli;
use mt_compare::presentation::render;
use mt_compare::state::AppState;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            eprintln!("\nInterrupted, shutting down...");
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let (mut config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    if config.logging.enable {
        init_logging(&config.logging)?;
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "failed to load config file, using defaults");
    }

    if cli.generate_config {
        let path = config::get_config_path().ok_or_else(|| {
            CompareError::Config("Cannot determine config directory".to_string())
        })?;
        if config::write_config_sample(&path)? {
            println!("Generated config file at: {}", path.display());
        } else {
            eprintln!("Config file already exists at: {}", path.display());
        }
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    let state = AppState::new(config)?;

    if cli.health {
        let health = check_health(&state.http_client, state.translator.base_url()).await?;
        print!("{}", render::format_health(state.translator.base_url(), &health));
        return Ok(());
    }

    if cli.interactive {
        tokio::select! {
            result = run_interactive(&state, cli.json) => {
                result?;
            }
            _ = shutdown_rx => {}
        }
        return Ok(());
    }

    let text = cli.text.join(" ");
    if text.trim().is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let outcome = tokio::select! {
        outcome = translate_all(state.translator.as_ref(), &text) => outcome,
        _ = shutdown_rx => {
            eprintln!("Translation interrupted");
            return Ok(());
        }
    };

    match outcome {
        Ok(results) => print_results(&results, &state.config, cli.json)?,
        Err(e) => {
            eprint!("{}", render::format_failure(&e.to_string(), state.config.enable_emoji));
            std::process::exit(1);
        }
    }

    Ok(())
}

/// One translate action per stdin line, until EOF
async fn run_interactive(state: &AppState, json: bool) -> anyhow::Result<()> {
    let session = TranslationSession::new(state.translator.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("{}", "Enter text to translate (Ctrl-D to quit)".cyan());
    while let Some(line) = lines.next_line().await? {
        if session.submit(&line).is_err() {
            continue;
        }
        eprintln!("{}", "Translating...".bright_black());

        match session.wait().await {
            SessionState::Settled(results) => print_results(&results, &state.config, json)?,
            SessionState::Failed(message) => {
                eprint!("{}", render::format_failure(&message, state.config.enable_emoji));
            }
            SessionState::Idle | SessionState::Pending => {}
        }
    }

    Ok(())
}

fn print_results(results: &TranslationResults, config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print!("{}", render::format_results(results, config.enable_emoji));
    }
    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
