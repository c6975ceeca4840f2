//! Crawl orchestration: pagination composed with per-article enrichment
//!
//! The harvester drives the listing pager and feeds each stub through the
//! enricher, sequentially and in listing order. Three access patterns share
//! that pipeline: stubs only, an eagerly collected full set, and a lazy
//! stream that yields each record as soon as its enrichment completes.

use crate::config::UserAgentConfig;
use crate::enrich::ArticleEnricher;
use crate::fetch::build_http_client;
use crate::listing::ListingPager;
use crate::model::{Article, EnrichedArticle};
use crate::search::SearchExtractor;
use crate::site::WikiSite;
use crate::stats::SiteStats;
use crate::HarvestError;
use async_stream::try_stream;
use futures::stream::Stream;
use tracing::info;

/// Default bound on search result elements inspected per query
pub const DEFAULT_SEARCH_LIMIT: usize = 1;

/// One wiki's crawl/enrichment pipeline behind a single handle
///
/// Holds only immutable identity and a cloned HTTP client; pagination
/// cursors are local to each call, so concurrent operations on the same
/// harvester do not interfere.
#[derive(Debug, Clone)]
pub struct WikiHarvester {
    site: WikiSite,
    pager: ListingPager,
    enricher: ArticleEnricher,
    search: SearchExtractor,
    stats: SiteStats,
}

impl WikiHarvester {
    /// Creates a harvester for a fandom short-name with default settings
    pub fn new(fandom: &str) -> Result<Self, HarvestError> {
        Self::with_search_limit(fandom, DEFAULT_SEARCH_LIMIT)
    }

    /// Creates a harvester with an explicit search result limit
    pub fn with_search_limit(fandom: &str, search_limit: usize) -> Result<Self, HarvestError> {
        let site = WikiSite::new(fandom)?;
        Self::from_site(site, &UserAgentConfig::default(), search_limit)
    }

    /// Creates a harvester for an already-built site identity
    ///
    /// This is the constructor used when the base address does not follow
    /// the `<fandom>.fandom.com` convention, including tests against a mock
    /// server.
    pub fn from_site(
        site: WikiSite,
        user_agent: &UserAgentConfig,
        search_limit: usize,
    ) -> Result<Self, HarvestError> {
        let client = build_http_client(&user_agent.header_value())?;
        Ok(Self {
            pager: ListingPager::new(client.clone(), site.clone()),
            enricher: ArticleEnricher::new(client.clone()),
            search: SearchExtractor::new(client.clone(), site.clone(), search_limit),
            stats: SiteStats::new(client, site.clone()),
            site,
        })
    }

    /// The site this harvester crawls
    pub fn site(&self) -> &WikiSite {
        &self.site
    }

    /// The wiki's authoritative article count, independent of pagination
    pub async fn article_count(&self) -> Result<u64, HarvestError> {
        self.stats.article_count().await
    }

    /// Lists article stubs without enriching them
    ///
    /// Listing pages are the only network cost; no article page is touched.
    pub async fn list_stubs(&self, max_items: Option<usize>) -> Result<Vec<Article>, HarvestError> {
        self.pager.list_all(max_items).await
    }

    /// Enriches a single stub
    pub async fn enrich(&self, stub: &Article) -> Result<EnrichedArticle, HarvestError> {
        self.enricher.enrich(stub).await
    }

    /// Searches the wiki and returns matching stubs
    pub async fn search_results(&self, query: &str) -> Result<Vec<Article>, HarvestError> {
        self.search.search(query).await
    }

    /// Searches the wiki and enriches every hit
    ///
    /// Sequential and fail-fast, like [`collect_all`](Self::collect_all).
    pub async fn search(&self, query: &str) -> Result<Vec<EnrichedArticle>, HarvestError> {
        let stubs = self.search_results(query).await?;
        let mut enriched = Vec::with_capacity(stubs.len());
        for stub in &stubs {
            enriched.push(self.enricher.enrich(stub).await?);
        }
        Ok(enriched)
    }

    /// Eagerly lists and enriches up to `max_items` articles
    ///
    /// Any single enrichment failure aborts the whole operation; no partial
    /// collection is returned.
    pub async fn collect_all(
        &self,
        max_items: Option<usize>,
    ) -> Result<Vec<EnrichedArticle>, HarvestError> {
        let stubs = self.list_stubs(max_items).await?;
        let mut enriched = Vec::with_capacity(stubs.len());
        for stub in &stubs {
            enriched.push(self.enricher.enrich(stub).await?);
        }
        info!(count = enriched.len(), "collected enriched articles");
        Ok(enriched)
    }

    /// Lazily streams enriched articles, up to `max_items`
    ///
    /// Listing pages are re-walked one batch at a time; each stub is
    /// enriched and yielded before the next one is fetched, so the caller
    /// sees every record the moment its single enrichment call completes and
    /// nothing is buffered. The caller drives progress by pulling; an
    /// abandoned stream simply issues no further requests. The first
    /// enrichment or listing failure is yielded as an error and ends the
    /// stream; items produced before it remain valid.
    pub fn stream_all(
        &self,
        max_items: Option<usize>,
    ) -> impl Stream<Item = Result<EnrichedArticle, HarvestError>> + '_ {
        try_stream! {
            let mut produced = 0usize;
            let mut cursor: Option<String> = None;

            'pages: loop {
                let batch = self.pager.fetch_batch(cursor.as_deref()).await?;

                for stub in batch.articles {
                    if max_items.map_or(false, |max| produced >= max) {
                        break 'pages;
                    }
                    let enriched = self.enricher.enrich(&stub).await?;
                    produced += 1;
                    yield enriched;
                }

                // Stop before requesting another listing page when the cap
                // was reached exactly at a batch boundary.
                if max_items.map_or(false, |max| produced >= max) {
                    break;
                }
                match batch.next {
                    Some(next) => cursor = Some(next),
                    None => break,
                }
            }

            info!(count = produced, "stream finished");
        }
    }
}
