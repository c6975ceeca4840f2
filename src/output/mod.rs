//! Output module for consuming the enriched article stream
//!
//! This module handles:
//! - Writing each enriched article to its own text file
//! - Sanitizing display titles into safe filenames
//! - Reporting success/failure counts for a crawl run

mod files;

pub use files::{sanitize_title, stream_to_files, StreamReport};
