//! CLI definitions and entry point

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::commands;
use pagekit::config::Config;
use pagekit::output::OutputMode;

/// pagekit - Pagination and debounced search demos
#[derive(Parser, Debug)]
#[command(
    name = "pagekit",
    version,
    about = "Pagination and debounced search demos",
    long_about = "Page through a collection and search it with a debounced query.\n\n\
                  Pages are derived from the item count, page size and requested page.\n\
                  Searches only run once the query has been quiet for the configured delay."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $PAGEKIT_CONFIG or ~/.config/pagekit/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one page of a collection
    Pages {
        /// Page a synthetic collection of this many items
        #[arg(short, long, conflicts_with = "file")]
        total: Option<usize>,

        /// Page the lines of this file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Items per page
        #[arg(long)]
        per_page: Option<usize>,

        /// Page to show (out-of-range pages are clamped)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Move forward this many pages after jumping
        #[arg(long, default_value_t = 0)]
        next: usize,

        /// Move back this many pages after jumping
        #[arg(long, default_value_t = 0)]
        prev: usize,
    },

    /// Search a catalog with a debounced query read line by line from stdin
    Search {
        /// Quiet period in milliseconds before a query runs
        #[arg(short, long)]
        delay: Option<u64>,

        /// Search the lines of this file instead of the built-in catalog
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Some(Command::Pages {
            total,
            file,
            per_page,
            page,
            next,
            prev,
        }) => {
            let request = commands::PageRequest {
                total,
                file,
                items_per_page: per_page.unwrap_or(config.pagination.items_per_page),
                page,
                next,
                prev,
            };
            commands::pages(&request, output_mode)
        },
        Some(Command::Search { delay, file }) => {
            let delay = delay.map_or_else(|| config.debounce.delay(), Duration::from_millis);
            commands::search(delay, file.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": pagekit::VERSION
                    })
                );
            } else {
                println!("pagekit v{}", pagekit::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": pagekit::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("pagekit v{}", pagekit::VERSION);
                println!("\nRun 'pagekit --help' for usage");
                println!("Run 'pagekit pages' to page through the built-in catalog");
            }
            Ok(())
        },
    }
}
