//! Pure text cleanup for extracted article bodies

use once_cell::sync::Lazy;
use regex::Regex;

/// Bracketed numeric citation markers, e.g. `[3]` or `[127]`
static CITATION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").expect("valid regex"));

/// Strips newline/carriage-return characters and citation markers
///
/// Newlines are dropped first so a marker split across a line break is still
/// removed; the whole cleanup is idempotent.
pub fn clean_text(raw: &str) -> String {
    let flattened: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    CITATION_MARKER.replace_all(&flattened, "").into_owned()
}

/// True when the text contains nothing but whitespace
///
/// Paragraphs that fail this filter contribute nothing to the cleaned body:
/// they are neither appended nor counted.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_citation_markers() {
        assert_eq!(clean_text("fact[1] and fiction[23]"), "fact and fiction");
    }

    #[test]
    fn test_strips_newlines_and_carriage_returns() {
        assert_eq!(clean_text("line one\r\nline two\nline three"), "line oneline twoline three");
    }

    #[test]
    fn test_keeps_non_numeric_brackets() {
        assert_eq!(clean_text("see [note] and [1a]"), "see [note] and [1a]");
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let inputs = [
            "plain text",
            "cite[1]\nmore[22]\r\n",
            "split[\n3]marker",
            "",
        ];
        for input in inputs {
            let once = clean_text(input);
            let twice = clean_text(&once);
            assert_eq!(once, twice, "cleanup not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n  "));
        assert!(!is_blank("  x  "));
    }
}
