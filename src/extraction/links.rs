//! Reference link extraction
//!
//! References are the outbound citations of a detail page: every anchor whose
//! `href` is an absolute HTTP(S) URL.

use super::parse_selector;
use crate::error::{ExtractionError, Result};
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

const ABSOLUTE_HTTP: &str = r"^https?://";

/// Reference link extraction functionality
pub struct ReferenceExtractor {
    anchors: Selector,
    pattern: Regex,
}

impl ReferenceExtractor {
    /// Compile the anchor selector and URL pattern
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(ABSOLUTE_HTTP)
            .map_err(|e| ExtractionError::InvalidSelector(format!("Invalid regex: {}", e)))?;
        Ok(Self {
            anchors: parse_selector("a[href]")?,
            pattern,
        })
    }

    /// Matching `href` values, verbatim and in document order.
    ///
    /// Relative links are ignored; duplicates are kept.
    pub fn extract(&self, document: &Html) -> Vec<String> {
        let references: Vec<String> = document
            .select(&self.anchors)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| self.pattern.is_match(href))
            .map(String::from)
            .collect();

        debug!("Extracted {} references", references.len());
        references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_order_and_duplicates() {
        let document = Html::parse_document(
            r##"<body>
                <a href="https://b.example/2">b</a>
                <a href="/d/asthma">relative</a>
                <p><a href="http://a.example/1">a</a></p>
                <a href="#faq">anchor</a>
                <a href="mailto:info@example.com">mail</a>
                <a>no href</a>
                <a href="https://b.example/2">again</a>
            </body>"##,
        );
        let references = ReferenceExtractor::new().unwrap().extract(&document);

        assert_eq!(
            references,
            vec![
                "https://b.example/2".to_string(),
                "http://a.example/1".to_string(),
                "https://b.example/2".to_string(),
            ]
        );
    }

    #[test]
    fn test_pattern_is_anchored_and_case_sensitive() {
        let document = Html::parse_document(
            r#"<a href="see https://x.example">text</a>
               <a href="HTTPS://upper.example">upper</a>
               <a href="https:/broken">broken</a>"#,
        );
        assert!(ReferenceExtractor::new().unwrap().extract(&document).is_empty());
    }
}
