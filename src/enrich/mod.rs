//! Per-article download-and-clean transformation
//!
//! Enrichment turns an article stub into a full record: the page is
//! downloaded once, a primary image reference is extracted, and the body is
//! reduced to a single line of cleaned text. Sidebars, pull-quotes, and
//! galleries are excluded before paragraph scanning so nothing inside those
//! subtrees ever contributes body text.

mod text;

pub use text::clean_text;

use crate::fetch;
use crate::model::{Article, EnrichedArticle};
use crate::HarvestError;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Infobox thumbnail image, the preferred image source
const THUMBNAIL_SELECTOR: &str = ".pi-image-thumbnail";

/// Generic image link, the fallback image source
const IMAGE_LINK_SELECTOR: &str = ".image";

/// Class marking pull-quote containers
const PULL_QUOTE_CLASS: &str = "cquote";

/// Downloads article pages and extracts image + cleaned body text
#[derive(Debug, Clone)]
pub struct ArticleEnricher {
    client: Client,
}

impl ArticleEnricher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Enriches one stub into a full record
    ///
    /// # Errors
    ///
    /// * [`HarvestError::MissingUrl`] - the stub has an empty `url`; raised
    ///   before any network call is made.
    /// * [`HarvestError::Status`] / [`HarvestError::Transport`] - the page
    ///   download failed; no partial record is returned.
    pub async fn enrich(&self, stub: &Article) -> Result<EnrichedArticle, HarvestError> {
        if stub.url.is_empty() {
            return Err(HarvestError::MissingUrl);
        }

        let page = fetch::download(&self.client, &stub.url).await?;
        let enriched = enrich_from_page(stub, &page);

        debug!(
            url = %stub.url,
            has_img = enriched.img.is_some(),
            body_len = enriched.article.as_deref().map_or(0, str::len),
            "enriched article"
        );
        Ok(enriched)
    }
}

/// Builds the enriched record from a downloaded article page
fn enrich_from_page(stub: &Article, page: &str) -> EnrichedArticle {
    let document = Html::parse_document(page);

    EnrichedArticle {
        stub: stub.clone(),
        img: extract_image(&document),
        article: Some(extract_body(&document)),
    }
}

/// Finds the page's primary image reference
///
/// Prefers the infobox thumbnail's `src`; falls back to a generic image
/// link's `href`. Neither being present is not an error.
fn extract_image(document: &Html) -> Option<String> {
    let thumbnail = Selector::parse(THUMBNAIL_SELECTOR).expect("static selector");
    let image_link = Selector::parse(IMAGE_LINK_SELECTOR).expect("static selector");

    let thumb_src = document
        .select(&thumbnail)
        .next()
        .and_then(|el| el.value().attr("src"))
        .filter(|src| !src.is_empty());
    if let Some(src) = thumb_src {
        return Some(src.to_string());
    }

    document
        .select(&image_link)
        .next()
        .and_then(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

/// Collects paragraph text in document order and cleans it
///
/// Paragraphs inside excluded subtrees and paragraphs that are entirely
/// whitespace are discarded; the survivors are joined with single spaces and
/// passed through [`clean_text`]. An empty result is a valid outcome.
fn extract_body(document: &Html) -> String {
    let paragraph = Selector::parse("p").expect("static selector");

    let mut paragraphs: Vec<String> = Vec::new();
    for element in document.select(&paragraph) {
        if in_excluded_subtree(element) {
            continue;
        }
        let text: String = element.text().collect();
        if text::is_blank(&text) {
            continue;
        }
        paragraphs.push(text);
    }

    clean_text(&paragraphs.join(" "))
}

/// True when the element sits inside (or is) a sidebar, pull-quote, or
/// gallery subtree
fn in_excluded_subtree(element: ElementRef) -> bool {
    if is_excluded(element) {
        return true;
    }
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(is_excluded)
}

fn is_excluded(element: ElementRef) -> bool {
    let value = element.value();
    value.name() == "aside"
        || value.name() == "gallery"
        || value.classes().any(|class| class == PULL_QUOTE_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub() -> Article {
        Article {
            id: "14".to_string(),
            title: "Death Star".to_string(),
            url: "https://testwiki.fandom.com/wiki/Death_Star".to_string(),
        }
    }

    #[test]
    fn test_extracts_thumbnail_image() {
        let page = r#"<html><body>
            <img class="pi-image-thumbnail" src="https://img.example/thumb.png">
            <a class="image" href="https://img.example/full.png">img</a>
            <p>Body</p>
        </body></html>"#;

        let enriched = enrich_from_page(&stub(), page);
        assert_eq!(enriched.img.as_deref(), Some("https://img.example/thumb.png"));
    }

    #[test]
    fn test_falls_back_to_image_link() {
        let page = r#"<html><body>
            <a class="image" href="https://img.example/full.png">img</a>
            <p>Body</p>
        </body></html>"#;

        let enriched = enrich_from_page(&stub(), page);
        assert_eq!(enriched.img.as_deref(), Some("https://img.example/full.png"));
    }

    #[test]
    fn test_no_image_is_not_an_error() {
        let enriched = enrich_from_page(&stub(), "<html><body><p>Body</p></body></html>");
        assert!(enriched.img.is_none());
        assert_eq!(enriched.article.as_deref(), Some("Body"));
    }

    #[test]
    fn test_joins_paragraphs_and_cleans() {
        let page = "<html><body>\
            <p>Hello world</p>\
            <p>   </p>\
            <p>Second[3]\n part</p>\
        </body></html>";

        let enriched = enrich_from_page(&stub(), page);
        assert_eq!(enriched.article.as_deref(), Some("Hello world Second part"));
    }

    #[test]
    fn test_excluded_subtrees_contribute_nothing() {
        let page = r#"<html><body>
            <aside><p>Infobox noise</p></aside>
            <div class="cquote"><p>Quoted noise</p></div>
            <gallery><p>Gallery noise</p></gallery>
            <p>Actual body</p>
        </body></html>"#;

        let enriched = enrich_from_page(&stub(), page);
        assert_eq!(enriched.article.as_deref(), Some("Actual body"));
    }

    #[test]
    fn test_no_paragraphs_yields_empty_body() {
        let enriched = enrich_from_page(&stub(), "<html><body><div>nothing</div></body></html>");
        assert_eq!(enriched.article.as_deref(), Some(""));
    }

    #[test]
    fn test_stub_fields_carried_through() {
        let enriched = enrich_from_page(&stub(), "<html><body><p>Body</p></body></html>");
        assert_eq!(enriched.stub, stub());
    }
}
