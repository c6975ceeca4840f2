//! Keyword search over the wiki's HTML search page
//!
//! The search page is markup, not JSON: result titles are anchor elements
//! carrying the page link, a numeric page-id attribute, and the display
//! title. Extraction walks result elements in document order and breaks out
//! of the scan once `limit` elements have been inspected; elements past the
//! limit are never queried at all. The limit bounds elements inspected, not
//! elements kept, so a result with a missing page id still consumes a slot.

use crate::fetch;
use crate::model::Article;
use crate::site::WikiSite;
use crate::HarvestError;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

/// Selector matching result-title anchors on the search page
const RESULT_TITLE_SELECTOR: &str = ".unified-search__result__title";

/// Extracts a bounded list of article stubs from search result pages
#[derive(Debug, Clone)]
pub struct SearchExtractor {
    client: Client,
    site: WikiSite,
    limit: usize,
}

impl SearchExtractor {
    /// Creates an extractor that inspects at most `limit` result elements
    pub fn new(client: Client, site: WikiSite, limit: usize) -> Self {
        Self {
            client,
            site,
            limit,
        }
    }

    /// Searches the wiki and returns the kept result stubs
    ///
    /// # Errors
    ///
    /// * [`HarvestError::NoResults`] - no result element within the limit
    ///   carried a page id; an empty result set is a hard failure, not an
    ///   empty success.
    /// * [`HarvestError::Status`] / [`HarvestError::Transport`] - the search
    ///   page itself could not be downloaded.
    pub async fn search(&self, query: &str) -> Result<Vec<Article>, HarvestError> {
        let url = self.site.search_url(query);
        let page = fetch::download(&self.client, url.as_str()).await?;

        let (articles, inspected) = extract_results(&page, self.limit);
        debug!(
            query,
            inspected,
            kept = articles.len(),
            "scanned search results"
        );

        if articles.is_empty() {
            return Err(HarvestError::NoResults {
                query: query.to_string(),
            });
        }
        Ok(articles)
    }
}

/// Scans result-title elements in document order, inspecting at most `limit`
///
/// Returns the kept stubs and the number of elements actually inspected. The
/// count exists so callers (and tests) can verify the early break: elements
/// beyond the limit must never have their attributes read.
fn extract_results(page: &str, limit: usize) -> (Vec<Article>, usize) {
    let document = Html::parse_document(page);
    let selector = Selector::parse(RESULT_TITLE_SELECTOR).expect("static selector");

    let mut articles = Vec::new();
    let mut inspected = 0usize;

    for element in document.select(&selector) {
        if inspected >= limit {
            break;
        }
        inspected += 1;

        let url = element.value().attr("href").unwrap_or("").to_string();
        let id = element.value().attr("data-page-id").unwrap_or("").to_string();
        let title = element.value().attr("data-title").unwrap_or("").to_string();

        // Results without a page id are skipped but still consume a slot.
        if id.is_empty() {
            continue;
        }

        articles.push(Article { id, title, url });
    }

    (articles, inspected)
}
