//! Record types produced by the crawl pipeline
//!
//! An [`Article`] is a stub: identity and location only, as returned by the
//! listing API or the search page. An [`EnrichedArticle`] is the same stub
//! after its page has been downloaded and cleaned.

use serde::{Deserialize, Serialize};

/// An article stub: identity and location, pre-enrichment
///
/// Invariants: `id` is non-empty, `url` is an absolute page address, and
/// `title` is the raw display title (it may contain spaces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stringified numeric page id
    pub id: String,

    /// Raw display title
    pub title: String,

    /// Absolute address of the article page
    pub url: String,
}

/// An article stub plus the content extracted from its page
///
/// Built exactly once per stub by the enricher and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedArticle {
    /// The stub this record was enriched from
    #[serde(flatten)]
    pub stub: Article,

    /// Primary image address, when the page carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    /// Cleaned body text: whitespace-joined paragraphs with newlines and
    /// `[123]`-style citation markers stripped. May be the empty string when
    /// the page had no qualifying paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
}
