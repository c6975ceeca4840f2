//! Wikia-Harvest: a crawl/enrichment pipeline for Fandom wikis
//!
//! This crate walks a wiki's paginated `allpages` listing API, downloads each
//! article page, and normalizes the scraped HTML into plain text records. It
//! also exposes the wiki's keyword search page and its authoritative article
//! count. Results are available either as a fully materialized collection or
//! as a lazy, pull-driven stream with early termination.

pub mod config;
pub mod crawler;
pub mod enrich;
pub mod fetch;
pub mod listing;
pub mod model;
pub mod output;
pub mod search;
pub mod site;
pub mod stats;

use thiserror::Error;

/// Main error type for Wikia-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("article url is required")]
    MissingUrl,

    #[error("invalid fandom name: {0:?}")]
    InvalidFandom(String),

    #[error("invalid wiki address: {0}")]
    Address(#[from] url::ParseError),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to download {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no articles found for query {query:?}")]
    NoResults { query: String },

    #[error("site statistics missing a numeric article count")]
    MissingStatistic,

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}
