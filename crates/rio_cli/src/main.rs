//! Rio CLI
//!
//! Reports over Project Rio stat files: game summaries, category and runner
//! queries, per-character event sets, and batch summaries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rio_cli::{batch_summaries, character_report, load_game, load_schema_table, to_list};

#[derive(Parser)]
#[command(name = "rio")]
#[command(about = "Statistics and event queries for Project Rio stat files", long_about = None)]
#[command(version)]
struct Cli {
    /// YAML schema revision table replacing the built-in one
    #[arg(long, global = true)]
    schema_table: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the game summary as JSON
    Summary {
        /// Stat file path
        #[arg(long)]
        r#in: PathBuf,
    },

    /// List the events in one category
    Events {
        #[arg(long)]
        r#in: PathBuf,

        /// Canonical category name, e.g. "Star Hits"
        #[arg(long)]
        category: String,
    },

    /// Composite runner-on-base query
    Runners {
        #[arg(long)]
        r#in: PathBuf,

        /// Comma-separated base selectors in -3..=3, e.g. "1,-2" or "0"
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        bases: Vec<i64>,
    },

    /// At-bat, pitching and fielding events of one character
    Character {
        #[arg(long)]
        r#in: PathBuf,

        /// Character id as written in the stat file
        #[arg(long = "char")]
        char_id: String,
    },

    /// Print the JSON Schema of accepted stat files
    Schema,

    /// Summarize many stat files in parallel
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn init_logging(default_level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
    // Reports still go to stdout without a subscriber.
    if let Err(err) = result {
        eprintln!("rio: logging disabled: {}", err);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize output")?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let table = load_schema_table(cli.schema_table.as_deref())?;

    match cli.command {
        Commands::Summary { r#in } => {
            let stats = load_game(&r#in, &table)?;
            print_json(&stats.summary()?)?;
        }

        Commands::Events { r#in, category } => {
            let stats = load_game(&r#in, &table)?;
            let events = stats.category_events(&category)?;
            tracing::info!(category = %category, count = events.len(), "category query");
            print_json(&to_list(events))?;
        }

        Commands::Runners { r#in, bases } => {
            let stats = load_game(&r#in, &table)?;
            let events = stats
                .runner_on_base_events(&bases)
                .with_context(|| format!("Invalid base selectors {:?}", bases))?;
            print_json(&to_list(&events))?;
        }

        Commands::Character { r#in, char_id } => {
            let stats = load_game(&r#in, &table)?;
            if stats.characters().get(&char_id).is_none() {
                tracing::warn!("character '{}' does not appear in {}", char_id, r#in.display());
            }
            print_json(&character_report(&stats, &char_id))?;
        }

        Commands::Schema => {
            print_json(&rio_core::game_record_schema())?;
        }

        Commands::Batch { files } => {
            let entries = batch_summaries(&files, &table);
            let failed = entries.iter().filter(|e| e.error.is_some()).count();
            if failed > 0 {
                tracing::warn!("{} of {} files failed", failed, entries.len());
            }
            print_json(&entries)?;
        }
    }

    Ok(())
}
