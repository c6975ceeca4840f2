//! Wikia-Harvest main entry point
//!
//! This is the command-line interface for the Wikia-Harvest wiki scraper.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wikia_harvest::config::{load_config, Config};
use wikia_harvest::crawler::WikiHarvester;
use wikia_harvest::output::stream_to_files;
use wikia_harvest::site::WikiSite;

/// Wikia-Harvest: pull article text out of Fandom wikis
///
/// Wikia-Harvest walks a wiki's paginated listing API, downloads article
/// pages, and normalizes them into plain text. It can report the wiki's
/// article count, list stubs, run keyword searches, and stream cleaned
/// articles into per-title text files.
#[derive(Parser, Debug)]
#[command(name = "wikia-harvest")]
#[command(version)]
#[command(about = "Pull article text out of Fandom wikis", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the wiki's authoritative article count
    Count {
        /// Fandom short-name, e.g. "starwars"
        fandom: String,
    },

    /// List article stubs from the paginated listing API
    List {
        /// Fandom short-name, e.g. "starwars"
        fandom: String,

        /// Maximum number of stubs to list
        #[arg(long)]
        max: Option<usize>,
    },

    /// Search the wiki and print matching articles
    Search {
        /// Fandom short-name, e.g. "starwars"
        fandom: String,

        /// Keyword query
        query: String,

        /// Maximum search result elements to inspect
        #[arg(long)]
        limit: Option<usize>,

        /// Download and clean every hit instead of printing stubs
        #[arg(long)]
        full: bool,
    },

    /// Stream cleaned articles into per-title text files
    Crawl {
        /// Fandom short-name, e.g. "starwars"
        fandom: String,

        /// Maximum number of articles to produce
        #[arg(long)]
        max: Option<usize>,

        /// Output directory for the article files
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration when a file was given; otherwise use defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Count { fandom } => handle_count(&fandom, &config).await,
        Command::List { fandom, max } => handle_list(&fandom, max, &config).await,
        Command::Search {
            fandom,
            query,
            limit,
            full,
        } => handle_search(&fandom, &query, limit, full, &config).await,
        Command::Crawl { fandom, max, out } => handle_crawl(&fandom, max, out, &config).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wikia_harvest=info,warn"),
            1 => EnvFilter::new("wikia_harvest=debug,info"),
            2 => EnvFilter::new("wikia_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds a harvester for one fandom from the loaded configuration
fn build_harvester(
    fandom: &str,
    config: &Config,
    search_limit: Option<usize>,
) -> anyhow::Result<WikiHarvester> {
    let site = WikiSite::new(fandom)?;
    let limit = search_limit.unwrap_or(config.harvest.search_limit);
    let harvester = WikiHarvester::from_site(site, &config.user_agent, limit)?;
    Ok(harvester)
}

/// Handles the `count` subcommand
async fn handle_count(fandom: &str, config: &Config) -> anyhow::Result<()> {
    let harvester = build_harvester(fandom, config, None)?;
    let count = harvester.article_count().await?;
    println!("{}.fandom.com reports {} articles", fandom, count);
    Ok(())
}

/// Handles the `list` subcommand
async fn handle_list(fandom: &str, max: Option<usize>, config: &Config) -> anyhow::Result<()> {
    let harvester = build_harvester(fandom, config, None)?;
    let max = max.or(config.harvest.max_articles);

    let stubs = harvester.list_stubs(max).await?;
    for stub in &stubs {
        println!("{}\t{}\t{}", stub.id, stub.title, stub.url);
    }
    println!("Listed {} stubs from {}.fandom.com", stubs.len(), fandom);
    Ok(())
}

/// Handles the `search` subcommand
async fn handle_search(
    fandom: &str,
    query: &str,
    limit: Option<usize>,
    full: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let harvester = build_harvester(fandom, config, limit)?;

    if full {
        let articles = harvester.search(query).await?;
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else {
        let stubs = harvester.search_results(query).await?;
        for stub in &stubs {
            println!("{}\t{}\t{}", stub.id, stub.title, stub.url);
        }
    }
    Ok(())
}

/// Handles the `crawl` subcommand: stream enriched articles to text files
async fn handle_crawl(
    fandom: &str,
    max: Option<usize>,
    out: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    let harvester = build_harvester(fandom, config, None)?;
    let max = max.or(config.harvest.max_articles);
    let out = out.unwrap_or_else(|| PathBuf::from(&config.harvest.output_dir));

    tracing::info!(
        "Streaming up to {} articles from {}.fandom.com into {}",
        max.map_or_else(|| "all".to_string(), |m| m.to_string()),
        fandom,
        out.display()
    );

    let report = stream_to_files(&harvester, max, &out).await?;

    println!("Summary:");
    println!("- Successfully wrote: {} files", report.written);
    println!("- Errors: {}", report.failed);
    if !report.errors.is_empty() {
        println!("Errors:");
        for error in &report.errors {
            println!("  - {}", error);
        }
    }
    Ok(())
}
