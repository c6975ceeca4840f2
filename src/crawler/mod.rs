//! Crawl orchestration over one wiki
//!
//! This module composes the leaf components into the public pipeline:
//! - Cursor-driven pagination (listing pager)
//! - Per-article enrichment
//! - Keyword search extraction
//! - The site statistics leaf
//!
//! All access patterns are strictly sequential: every network call is
//! awaited to completion before the next one is issued.

mod harvester;

pub use harvester::{WikiHarvester, DEFAULT_SEARCH_LIMIT};
