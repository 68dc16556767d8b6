//! Detail page extraction
//!
//! This module turns one disease detail page into a [`DiseaseRecord`]:
//! the fixed text sections, the FAQ blocks and the outbound reference links.

pub mod detail;
pub mod faq;
pub mod links;
pub mod record;
pub mod sections;

pub use detail::{DetailExtractor, ExtractionBatch, PageFailure};
pub use faq::FaqExtractor;
pub use links::ReferenceExtractor;
pub use record::{
    DiseaseRecord, FaqEntry, DISEASE_NAME_COLUMN, FAQS_COLUMN, REFERENCES_COLUMN,
};
pub use sections::{Section, SectionExtractor};

use crate::error::{ExtractionError, Result};
use scraper::{ElementRef, Selector};

/// Compile a CSS selector, reporting the offending text on failure
pub(crate) fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {}", css, e)).into())
}

/// All descendant text of `element`, concatenated and trimmed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_element_text_concatenates_descendants() {
        let html = Html::parse_fragment(
            "<div id=\"x\">\n  <p>Hello <b>big</b></p><p> world</p>\n</div>",
        );
        let selector = parse_selector("#x").unwrap();
        let div = html.select(&selector).next().unwrap();
        assert_eq!(element_text(div), "Hello big world");
    }

    #[test]
    fn test_invalid_selector() {
        let err = parse_selector("section[").unwrap_err();
        assert!(err.to_string().contains("Invalid selector"));
    }
}
