//! FAQ block extraction

use super::{element_text, parse_selector, FaqEntry};
use crate::config::FaqPolicy;
use crate::error::{ExtractionError, Result};
use scraper::{Html, Selector};
use tracing::warn;

/// Pulls question/answer pairs out of `section.faq-section` blocks
pub struct FaqExtractor {
    block: Selector,
    question: Selector,
    answer: Selector,
    policy: FaqPolicy,
}

impl FaqExtractor {
    /// Compile the FAQ selectors
    pub fn new(policy: FaqPolicy) -> Result<Self> {
        Ok(Self {
            block: parse_selector("section.faq-section")?,
            question: parse_selector("h3")?,
            answer: parse_selector("div.faq-answer")?,
            policy,
        })
    }

    /// FAQ entries in document order.
    ///
    /// A block without an `h3` or a `div.faq-answer` is skipped under
    /// [`FaqPolicy::SkipEntry`] and fails the page under
    /// [`FaqPolicy::DropDisease`].
    pub fn extract(
        &self,
        document: &Html,
    ) -> std::result::Result<Vec<FaqEntry>, ExtractionError> {
        let mut faqs = Vec::new();

        for (index, block) in document.select(&self.block).enumerate() {
            let question = block.select(&self.question).next().map(element_text);
            let answer = block.select(&self.answer).next().map(element_text);

            match (question, answer) {
                (Some(question), Some(answer)) => faqs.push(FaqEntry { question, answer }),
                (question, _) => {
                    let missing = if question.is_none() { "question" } else { "answer" };
                    let err = ExtractionError::MalformedFaq { index, missing };
                    match self.policy {
                        FaqPolicy::SkipEntry => warn!("Skipping {}", err),
                        FaqPolicy::DropDisease => return Err(err),
                    }
                }
            }
        }

        Ok(faqs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"
        <section class="faq-section">
            <h3> What is it? </h3>
            <div class="faq-answer"> A disease. </div>
        </section>
        <section class="faq-section">
            <h3>Broken?</h3>
        </section>
        <section class="faq-section extra">
            <h3>Is it <em>common</em>?</h3>
            <h3>ignored</h3>
            <div class="faq-answer"><p>Very</p> common.</div>
        </section>
    "#;

    #[test]
    fn test_skip_entry_keeps_well_formed_blocks() {
        let document = Html::parse_document(PAGE);
        let faqs = FaqExtractor::new(FaqPolicy::SkipEntry)
            .unwrap()
            .extract(&document)
            .unwrap();

        assert_eq!(
            faqs,
            vec![
                FaqEntry::new("What is it?", "A disease."),
                FaqEntry::new("Is it common?", "Very common."),
            ]
        );
    }

    #[test]
    fn test_drop_disease_fails_on_malformed_block() {
        let document = Html::parse_document(PAGE);
        let err = FaqExtractor::new(FaqPolicy::DropDisease)
            .unwrap()
            .extract(&document)
            .unwrap_err();

        match err {
            ExtractionError::MalformedFaq { index, missing } => {
                assert_eq!(index, 1);
                assert_eq!(missing, "answer");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_question() {
        let document = Html::parse_document(
            r#"<section class="faq-section"><div class="faq-answer">orphan</div></section>"#,
        );
        let err = FaqExtractor::new(FaqPolicy::DropDisease)
            .unwrap()
            .extract(&document)
            .unwrap_err();
        assert_eq!(err.to_string(), "FAQ block 0 has no question");
    }

    #[test]
    fn test_no_faq_blocks() {
        let document = Html::parse_document("<p>nothing here</p>");
        let faqs = FaqExtractor::new(FaqPolicy::DropDisease)
            .unwrap()
            .extract(&document)
            .unwrap();
        assert!(faqs.is_empty());
    }
}
