//! Per-article text file writer
//!
//! Consumes the enriched article stream and writes one `<title>.txt` file
//! per record. Titles are sanitized for the filesystem; a failed write is
//! counted and logged but does not stop the stream, while a failed listing
//! fetch or enrichment ends the run with an error.

use crate::crawler::WikiHarvester;
use crate::model::EnrichedArticle;
use crate::HarvestError;
use futures::{pin_mut, StreamExt};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Maximum length of a sanitized filename stem, in characters
const MAX_FILENAME_LEN: usize = 100;

/// Outcome of one stream-to-files run
#[derive(Debug, Default)]
pub struct StreamReport {
    /// Files written successfully
    pub written: usize,

    /// Articles whose file could not be written
    pub failed: usize,

    /// Human-readable description of each write failure
    pub errors: Vec<String>,
}

/// Streams up to `max_items` enriched articles into `output_dir`
///
/// The directory is created if it does not exist. Articles are pulled one at
/// a time from [`WikiHarvester::stream_all`], so at most one article is in
/// memory at any point.
pub async fn stream_to_files(
    harvester: &WikiHarvester,
    max_items: Option<usize>,
    output_dir: &Path,
) -> Result<StreamReport, HarvestError> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = StreamReport::default();
    let stream = harvester.stream_all(max_items);
    pin_mut!(stream);

    while let Some(item) = stream.next().await {
        let article = item?;
        match write_article(output_dir, &article) {
            Ok(path) => {
                report.written += 1;
                info!(title = %article.stub.title, path = %path.display(), "wrote article");
            }
            Err(e) => {
                report.failed += 1;
                let message = format!("failed to write {}: {}", article.stub.title, e);
                warn!("{}", message);
                report.errors.push(message);
            }
        }
    }

    info!(
        written = report.written,
        failed = report.failed,
        "stream-to-files finished"
    );
    Ok(report)
}

/// Writes one enriched article as a text file, returning its path
fn write_article(dir: &Path, article: &EnrichedArticle) -> std::io::Result<PathBuf> {
    let path = dir.join(format!("{}.txt", sanitize_title(&article.stub.title)));

    let content = format!(
        "Title: {}\nURL: {}\nID: {}\nImage: {}\n\nContent:\n{}",
        article.stub.title,
        article.stub.url,
        article.stub.id,
        article.img.as_deref().unwrap_or("None"),
        article.article.as_deref().unwrap_or("No content available"),
    );

    std::fs::write(&path, content)?;
    Ok(path)
}

/// Turns a display title into a safe filename stem
///
/// Filesystem-reserved characters become underscores, whitespace runs
/// collapse to a single underscore, and the result is truncated to
/// [`MAX_FILENAME_LEN`] characters.
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        out.push(match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c => c,
        });
    }

    out.chars().take(MAX_FILENAME_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;

    #[test]
    fn test_sanitize_replaces_reserved_characters() {
        assert_eq!(sanitize_title("A/B: C?"), "A_B__C_");
    }

    #[test]
    fn test_sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize_title("Death   Star\tPlans"), "Death_Star_Plans");
    }

    #[test]
    fn test_sanitize_truncates_long_titles() {
        let long = "x".repeat(250);
        assert_eq!(sanitize_title(&long).chars().count(), MAX_FILENAME_LEN);
    }

    #[test]
    fn test_write_article_record_format() {
        let dir = tempfile::tempdir().unwrap();
        let article = EnrichedArticle {
            stub: Article {
                id: "14".to_string(),
                title: "Death Star".to_string(),
                url: "https://testwiki.fandom.com/wiki/Death_Star".to_string(),
            },
            img: None,
            article: Some("A moon-sized battle station".to_string()),
        };

        let path = write_article(dir.path(), &article).unwrap();
        assert_eq!(path.file_name().unwrap(), "Death_Star.txt");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Title: Death Star\n"));
        assert!(content.contains("ID: 14\n"));
        assert!(content.contains("Image: None\n"));
        assert!(content.ends_with("Content:\nA moon-sized battle station"));
    }
}
