//! Cursor-driven pagination over the wiki's `allpages` listing API
//!
//! One listing request returns a batch of article stubs and, while more pages
//! remain, an opaque continuation cursor. The absence of a cursor is the
//! authoritative end-of-listing signal. An unexpected response shape is not
//! an error: it degrades to a final empty batch so a malformed or evolving
//! API response cannot abort an otherwise-working crawl. That degradation is
//! logged at warn level as a monitored condition.

use crate::fetch;
use crate::model::Article;
use crate::site::WikiSite;
use crate::HarvestError;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

/// One page of listing results
#[derive(Debug, Clone)]
pub struct ListingBatch {
    /// Stubs in the order the API returned them
    pub articles: Vec<Article>,

    /// Continuation cursor for the next page; `None` means end of listing
    pub next: Option<String>,
}

/// Walks the paginated `allpages` listing API of one wiki
#[derive(Debug, Clone)]
pub struct ListingPager {
    client: Client,
    site: WikiSite,
}

impl ListingPager {
    pub fn new(client: Client, site: WikiSite) -> Self {
        Self { client, site }
    }

    /// Fetches one page of the listing
    ///
    /// The cursor must be one previously returned in [`ListingBatch::next`];
    /// pass `None` for the first page.
    ///
    /// # Errors
    ///
    /// Non-success HTTP status or transport failure. Callers must stop
    /// paginating on an error rather than retry: the cursor they hold may no
    /// longer be meaningful.
    pub async fn fetch_batch(&self, cursor: Option<&str>) -> Result<ListingBatch, HarvestError> {
        let url = self.site.listing_url(cursor);
        debug!(url = %url, cursor = ?cursor, "fetching listing page");

        let body = fetch::download_json(&self.client, url).await?;
        let batch = parse_listing(&self.site, &body);

        debug!(
            count = batch.articles.len(),
            next = ?batch.next,
            "parsed listing page"
        );
        Ok(batch)
    }

    /// Collects stubs across listing pages, up to an optional cap
    ///
    /// Repeatedly fetches batches starting with no cursor and stops when the
    /// API returns no continuation cursor or the accumulated count reaches
    /// `max_items`. When the cap cuts a batch short, the result is truncated
    /// to exactly `max_items`. Order is the order the API returned; stubs are
    /// never re-sorted.
    pub async fn list_all(&self, max_items: Option<usize>) -> Result<Vec<Article>, HarvestError> {
        let mut articles = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let batch = self.fetch_batch(cursor.as_deref()).await?;
            articles.extend(batch.articles);

            if let Some(max) = max_items {
                if articles.len() >= max {
                    articles.truncate(max);
                    break;
                }
            }

            match batch.next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        info!(count = articles.len(), "listed article stubs");
        Ok(articles)
    }
}

/// Maps one listing API response into a batch
///
/// Missing `query.allpages` yields an empty, cursor-less batch. Individual
/// page records without a numeric `pageid` or a string `title` are skipped.
fn parse_listing(site: &WikiSite, body: &Value) -> ListingBatch {
    let pages = match body.pointer("/query/allpages").and_then(Value::as_array) {
        Some(pages) => pages,
        None => {
            warn!("listing response missing query.allpages; treating as final empty batch");
            return ListingBatch {
                articles: Vec::new(),
                next: None,
            };
        }
    };

    let mut articles = Vec::with_capacity(pages.len());
    for page in pages {
        let id = match page.get("pageid").and_then(Value::as_u64) {
            Some(id) => id,
            None => continue,
        };
        let title = match page.get("title").and_then(Value::as_str) {
            Some(title) => title,
            None => continue,
        };

        articles.push(Article {
            id: id.to_string(),
            title: title.to_string(),
            url: site.page_url(title),
        });
    }

    let next = body
        .pointer("/continue/apcontinue")
        .and_then(Value::as_str)
        .map(str::to_string);

    ListingBatch { articles, next }
}
