//! Marquee CLI - Command-line interface
//!
//! Hosts the search input in a terminal.

mod commands;
mod render;

use clap::Parser;
use marquee_core::MarqueeConfig;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Movie search suggestions as you type")]
struct Cli {
    /// Console log level (full trace goes to logs/marquee-last-run.log)
    #[arg(long, value_enum, global = true, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    /// TMDB API key, overrides TMDB_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Result language, e.g. es-ES
    #[arg(long, global = true)]
    language: Option<String>,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), None)?;

    let mut config = MarqueeConfig::from_env();
    if let Some(api_key) = cli.api_key {
        config.tmdb.api_key = api_key;
    }
    if let Some(language) = cli.language {
        config.tmdb.language = language;
    }

    if let Err(e) = commands::handle_command(cli.command, config).await {
        tracing::error!(error = %e, "Command failed");
        anyhow::bail!(e.user_message());
    }

    Ok(())
}
