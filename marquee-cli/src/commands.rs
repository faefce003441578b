//! CLI command implementations

use std::sync::Arc;

use clap::{Subcommand, ValueEnum};
use marquee_core::navigation::Navigator;
use marquee_core::{MarqueeConfig, Result, spawn_search_input};
use marquee_search::{MovieSearchProvider, TmdbProvider};
use marquee_web::RenderOptions;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch suggestions for one query and print them
    Search {
        /// Movie title or fragment
        query: String,
    },
    /// Type queries line by line and watch suggestions update
    ///
    /// Each line replaces the search text. `:submit` submits the form,
    /// `:quit` exits.
    Interactive {
        /// How each state change is printed
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Rendering used by the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain terminal text
    Text,
    /// HTML fragment of the component
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands, config: MarqueeConfig) -> Result<()> {
    match command {
        Commands::Search { query } => search_once(query, config).await,
        Commands::Interactive { format } => run_interactive(format, config).await,
    }
}

/// Navigator for terminal sessions: prints where a browser would go.
#[derive(Debug)]
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, target: &str) {
        tracing::info!(target_route = target, "Navigating");
        println!("-> {target}");
    }
}

/// Run one search without debouncing
///
/// # Errors
/// - `MarqueeError::Search` - Provider could not be built or the request failed
pub async fn search_once(query: String, config: MarqueeConfig) -> Result<()> {
    if query.trim().chars().count() < config.suggest.min_query_chars {
        println!(
            "Query must have at least {} characters",
            config.suggest.min_query_chars
        );
        return Ok(());
    }

    let provider = TmdbProvider::new(config.tmdb.clone())?;
    let mut suggestions = provider.search_movies(query.trim()).await?;
    suggestions.truncate(config.suggest.max_suggestions);

    if suggestions.is_empty() {
        println!("No movies found for '{}'", query.trim());
        return Ok(());
    }

    for line in render::suggestion_lines(&suggestions) {
        println!("{line}");
    }

    Ok(())
}

/// Drive the debounced search input from stdin
///
/// # Errors
/// - `MarqueeError::Search` - Provider could not be built
/// - `MarqueeError::SearchInput` - Actor stopped unexpectedly
/// - `MarqueeError::Io` - Reading stdin failed
pub async fn run_interactive(format: OutputFormat, config: MarqueeConfig) -> Result<()> {
    let provider = Arc::new(TmdbProvider::new(config.tmdb.clone())?);
    let options = RenderOptions::from_config(&config);
    let handle = spawn_search_input(config.suggest.clone(), provider, Arc::new(PrintNavigator));

    let mut updates = handle.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            let output = match format {
                OutputFormat::Text => render::state_text(&state),
                OutputFormat::Html => marquee_web::search_input(&state, &options),
            };
            println!("{output}");
        }
    });

    println!("Type a movie title; ':submit' to search, ':quit' to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.as_str() {
            ":quit" => break,
            ":submit" => {
                // Submitting leaves the component, like a full page load
                if handle.submit().await?.is_some() {
                    break;
                }
            }
            _ => handle.set_query(line).await?,
        }
    }

    handle.shutdown().await?;
    printer.abort();

    Ok(())
}
