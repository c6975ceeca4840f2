use serde::Deserialize;

/// Main configuration structure for Wikia-Harvest
///
/// Every field has a default, so a config file is optional and may be
/// partial. Command-line flags override whatever the file provides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub harvest: HarvestConfig,

    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Harvest behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HarvestConfig {
    /// Maximum search result elements inspected per query
    #[serde(rename = "search-limit", default = "default_search_limit")]
    pub search_limit: usize,

    /// Default cap on articles produced across all listing batches
    #[serde(rename = "max-articles", default)]
    pub max_articles: Option<usize>,

    /// Directory the crawl subcommand writes article files into
    #[serde(rename = "output-dir", default = "default_output_dir")]
    pub output_dir: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the harvester
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Version of the harvester
    #[serde(default = "default_agent_version")]
    pub version: String,

    /// URL with information about the harvester
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!("{}/{} (+{})", self.name, self.version, self.contact_url)
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            max_articles: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            version: default_agent_version(),
            contact_url: default_contact_url(),
        }
    }
}

fn default_search_limit() -> usize {
    crate::crawler::DEFAULT_SEARCH_LIMIT
}

fn default_output_dir() -> String {
    "./output".to_string()
}

fn default_agent_name() -> String {
    "WikiaHarvest".to_string()
}

fn default_agent_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://github.com/wikia-harvest/wikia-harvest".to_string()
}
