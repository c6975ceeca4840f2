//! Wiki site identity and URL construction
//!
//! A [`WikiSite`] holds the base address of one wiki, derived once from its
//! fandom short-name and immutable afterwards. All endpoint URLs used by the
//! pipeline are built here: the `api.php` listing/statistics endpoints, the
//! keyword search page, and `/wiki/<Title>` article pages.

use crate::HarvestError;
use url::Url;

/// Path of the MediaWiki API endpoint
const API_PATH: &str = "/api.php";

/// Path of the keyword search page
const SEARCH_PATH: &str = "/search";

/// Immutable identity of one wiki site
#[derive(Debug, Clone)]
pub struct WikiSite {
    base: Url,
}

impl WikiSite {
    /// Creates a site from a fandom short-name, e.g. `"starwars"` becomes
    /// `https://starwars.fandom.com`.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidFandom`] if the short-name is empty or
    /// contains characters that cannot appear in a subdomain label.
    pub fn new(fandom: &str) -> Result<Self, HarvestError> {
        if fandom.is_empty()
            || fandom
                .chars()
                .any(|c| c == '.' || c == '/' || c.is_whitespace())
        {
            return Err(HarvestError::InvalidFandom(fandom.to_string()));
        }

        let base = Url::parse(&format!("https://{}.fandom.com", fandom))?;
        Ok(Self { base })
    }

    /// Creates a site from an explicit base address
    ///
    /// Used when the wiki is not hosted under `fandom.com`, and by tests that
    /// point the pipeline at a local mock server.
    pub fn from_base(base: Url) -> Self {
        Self { base }
    }

    /// The site's base address
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL of one listing API page
    ///
    /// The `apcontinue` parameter is included only when a cursor is present;
    /// the first page of a listing walk is requested without one.
    pub fn listing_url(&self, cursor: Option<&str>) -> Url {
        let mut url = self.base.clone();
        url.set_path(API_PATH);
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("action", "query")
                .append_pair("list", "allpages")
                .append_pair("aplimit", "max")
                .append_pair("format", "json");
            if let Some(cursor) = cursor {
                pairs.append_pair("apcontinue", cursor);
            }
        }
        url
    }

    /// URL of the site statistics endpoint
    pub fn statistics_url(&self) -> Url {
        let mut url = self.base.clone();
        url.set_path(API_PATH);
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("meta", "siteinfo")
            .append_pair("siprop", "statistics")
            .append_pair("format", "json");
        url
    }

    /// URL of the keyword search page for the given query
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(SEARCH_PATH);
        url.query_pairs_mut().append_pair("query", query);
        url
    }

    /// Absolute address of an article page, derived from its display title
    ///
    /// Spaces become underscores, then the title is percent-encoded, matching
    /// the `/wiki/<Title>` convention of the listing API's page records.
    pub fn page_url(&self, title: &str) -> String {
        let encoded = urlencoding::encode(&title.replace(' ', "_")).into_owned();
        let mut url = self.base.clone();
        url.set_path(&format!("/wiki/{}", encoded));
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_fandom_name() {
        let site = WikiSite::new("starwars").unwrap();
        assert_eq!(site.base().as_str(), "https://starwars.fandom.com/");
    }

    #[test]
    fn test_empty_fandom_rejected() {
        assert!(matches!(
            WikiSite::new(""),
            Err(HarvestError::InvalidFandom(_))
        ));
    }

    #[test]
    fn test_dotted_fandom_rejected() {
        assert!(matches!(
            WikiSite::new("evil.example.com"),
            Err(HarvestError::InvalidFandom(_))
        ));
    }

    #[test]
    fn test_listing_url_without_cursor() {
        let site = WikiSite::new("starwars").unwrap();
        let url = site.listing_url(None);
        assert_eq!(url.path(), "/api.php");
        let query = url.query().unwrap();
        assert!(query.contains("action=query"));
        assert!(query.contains("list=allpages"));
        assert!(query.contains("aplimit=max"));
        assert!(query.contains("format=json"));
        assert!(!query.contains("apcontinue"));
    }

    #[test]
    fn test_listing_url_with_cursor() {
        let site = WikiSite::new("starwars").unwrap();
        let url = site.listing_url(Some("Next_Page"));
        assert!(url.query().unwrap().contains("apcontinue=Next_Page"));
    }

    #[test]
    fn test_statistics_url() {
        let site = WikiSite::new("starwars").unwrap();
        let query = site.statistics_url().query().unwrap().to_string();
        assert!(query.contains("meta=siteinfo"));
        assert!(query.contains("siprop=statistics"));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let site = WikiSite::new("starwars").unwrap();
        let url = site.search_url("Death Star & friends");
        assert_eq!(url.path(), "/search");
        assert_eq!(url.query().unwrap(), "query=Death+Star+%26+friends");
    }

    #[test]
    fn test_page_url_replaces_spaces_with_underscores() {
        let site = WikiSite::new("starwars").unwrap();
        assert_eq!(
            site.page_url("Death Star"),
            "https://starwars.fandom.com/wiki/Death_Star"
        );
    }

    #[test]
    fn test_page_url_percent_encodes() {
        let site = WikiSite::new("starwars").unwrap();
        let url = site.page_url("R2-D2 & C-3PO");
        assert_eq!(url, "https://starwars.fandom.com/wiki/R2-D2_%26_C-3PO");
    }
}
