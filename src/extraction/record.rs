//! Extracted disease records

use super::Section;
use crate::error::Result;
use crate::export::{FaqRow, TableRow};
use serde::{Deserialize, Serialize};

/// Column holding the disease's display name
pub const DISEASE_NAME_COLUMN: &str = "Disease Name";

/// Column holding the FAQ list
pub const FAQS_COLUMN: &str = "FAQs";

/// Column holding the reference links
pub const REFERENCES_COLUMN: &str = "References";

/// A question/answer pair from a detail page's FAQ block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question heading
    #[serde(rename = "Question")]
    pub question: String,
    /// Answer text
    #[serde(rename = "Answer")]
    pub answer: String,
}

impl FaqEntry {
    /// Create an entry
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Everything extracted from one disease's detail page.
///
/// Every record carries all fixed sections (empty when the page lacks one),
/// so all records share the same keys in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseRecord {
    name: String,
    sections: [String; Section::COUNT],
    faqs: Vec<FaqEntry>,
    references: Vec<String>,
}

impl DiseaseRecord {
    /// Record with every section empty and no FAQs or references
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Default::default(),
            faqs: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Set one section's text
    pub fn with_section(mut self, section: Section, text: impl Into<String>) -> Self {
        self.sections[section.index()] = text.into();
        self
    }

    /// Replace all section texts at once (indexed by [`Section::index`])
    pub fn with_sections(mut self, sections: [String; Section::COUNT]) -> Self {
        self.sections = sections;
        self
    }

    /// Set the FAQ entries
    pub fn with_faqs(mut self, faqs: Vec<FaqEntry>) -> Self {
        self.faqs = faqs;
        self
    }

    /// Set the reference links
    pub fn with_references(mut self, references: Vec<String>) -> Self {
        self.references = references;
        self
    }

    /// Display name from the directory page
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of one section, empty when the page lacked it
    pub fn section(&self, section: Section) -> &str {
        &self.sections[section.index()]
    }

    /// FAQ entries in page order
    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    /// Absolute reference links in page order
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Column names shared by every record
    pub fn columns() -> Vec<&'static str> {
        let mut columns = Vec::with_capacity(Section::COUNT + 3);
        columns.push(DISEASE_NAME_COLUMN);
        columns.extend(Section::ALL.iter().map(|s| s.column()));
        columns.push(FAQS_COLUMN);
        columns.push(REFERENCES_COLUMN);
        columns
    }

    /// One normalized row per FAQ entry
    pub fn faq_rows(&self) -> impl Iterator<Item = FaqRow> + '_ {
        self.faqs.iter().map(move |faq| FaqRow {
            disease: self.name.clone(),
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        })
    }
}

impl TableRow for DiseaseRecord {
    fn keys(&self) -> Vec<String> {
        Self::columns().into_iter().map(String::from).collect()
    }

    fn values(&self) -> Result<Vec<String>> {
        let mut values = Vec::with_capacity(Section::COUNT + 3);
        values.push(self.name.clone());
        values.extend(self.sections.iter().cloned());
        values.push(serde_json::to_string(&self.faqs)?);
        values.push(serde_json::to_string(&self.references)?);
        Ok(values)
    }
}
