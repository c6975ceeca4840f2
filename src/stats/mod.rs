//! Authoritative article count from the site statistics endpoint
//!
//! Pagination can be stopped early by a cap and never reflects the wiki's
//! true size, so the total comes from a dedicated siteinfo request instead.
//! This component is an independent leaf: it shares the download primitive
//! with the rest of the pipeline but not the pagination state.

use crate::fetch;
use crate::site::WikiSite;
use crate::HarvestError;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Reads the wiki's statistics endpoint
#[derive(Debug, Clone)]
pub struct SiteStats {
    client: Client,
    site: WikiSite,
}

impl SiteStats {
    pub fn new(client: Client, site: WikiSite) -> Self {
        Self { client, site }
    }

    /// The wiki's authoritative total article count
    ///
    /// # Errors
    ///
    /// * [`HarvestError::MissingStatistic`] - the response lacked a numeric
    ///   `query.statistics.articles` field.
    /// * [`HarvestError::Status`] / [`HarvestError::Transport`] - the
    ///   endpoint could not be downloaded.
    pub async fn article_count(&self) -> Result<u64, HarvestError> {
        let url = self.site.statistics_url();
        let body = fetch::download_json(&self.client, url).await?;
        let count = extract_article_count(&body)?;
        debug!(count, "read site statistics");
        Ok(count)
    }
}

/// Pulls the numeric article count from a siteinfo response
fn extract_article_count(body: &Value) -> Result<u64, HarvestError> {
    body.pointer("/query/statistics/articles")
        .and_then(Value::as_u64)
        .ok_or(HarvestError::MissingStatistic)
}
