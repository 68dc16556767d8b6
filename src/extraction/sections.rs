//! Fixed text sections of a detail page
//!
//! The detail pages mark each topic with a `<section id="...">`. The mapping
//! from topic to element id and output column lives in one table so markup
//! changes on the site are a one-line edit.

use super::{element_text, parse_selector};
use crate::error::Result;
use scraper::{Html, Selector};

/// One of the fixed text sections of a disease record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// General description
    Overview,
    /// Short fact sheet
    KeyFacts,
    /// Symptoms
    Symptoms,
    /// Causes
    Causes,
    /// Types or forms of the disease
    Types,
    /// Risk factors
    RiskFactors,
    /// How it is diagnosed
    Diagnosis,
    /// Prevention
    Prevention,
    /// Which specialist to visit
    Specialist,
    /// Treatment
    Treatment,
    /// Home care
    HomeCare,
    /// Alternative therapies
    Alternatives,
    /// Living with the disease
    LivingWith,
}

// (section, element id, column), in output order
const SECTION_TABLE: [(Section, &str, &str); Section::COUNT] = [
    (Section::Overview, "overview", "Overview"),
    (Section::KeyFacts, "key-facts", "Key Facts"),
    (Section::Symptoms, "symptoms", "Symptoms"),
    (Section::Causes, "causes", "Causes"),
    (Section::Types, "types", "Types"),
    (Section::RiskFactors, "risk-factors", "Risk factors"),
    (Section::Diagnosis, "diagnosis", "Diagnosis"),
    (Section::Prevention, "prevention", "Prevention"),
    (Section::Specialist, "specialist", "Specialist to visit"),
    (Section::Treatment, "treatment", "Treatment"),
    (Section::HomeCare, "home-care", "Home-care"),
    (Section::Alternatives, "alternatives", "Alternatives therapies"),
    (Section::LivingWith, "living-with", "Living with"),
];

impl Section {
    /// Number of fixed sections
    pub const COUNT: usize = 13;

    /// Every section, in output order
    pub const ALL: [Section; Section::COUNT] = [
        Section::Overview,
        Section::KeyFacts,
        Section::Symptoms,
        Section::Causes,
        Section::Types,
        Section::RiskFactors,
        Section::Diagnosis,
        Section::Prevention,
        Section::Specialist,
        Section::Treatment,
        Section::HomeCare,
        Section::Alternatives,
        Section::LivingWith,
    ];

    /// Position in output order
    pub fn index(self) -> usize {
        self as usize
    }

    /// `id` attribute of the `<section>` holding this topic
    pub fn element_id(self) -> &'static str {
        SECTION_TABLE[self.index()].1
    }

    /// Column header in the CSV output
    pub fn column(self) -> &'static str {
        SECTION_TABLE[self.index()].2
    }
}

/// Pulls the fixed sections out of a parsed page
pub struct SectionExtractor {
    selectors: Vec<(Section, Selector)>,
}

impl SectionExtractor {
    /// Compile one selector per table row
    pub fn new() -> Result<Self> {
        let selectors = SECTION_TABLE
            .iter()
            .map(|(section, id, _)| {
                parse_selector(&format!("section[id=\"{}\"]", id)).map(|s| (*section, s))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { selectors })
    }

    /// Trimmed text of every section; absent sections are empty strings
    pub fn extract(&self, document: &Html) -> [String; Section::COUNT] {
        let mut texts: [String; Section::COUNT] = Default::default();
        for (section, selector) in &self.selectors {
            if let Some(element) = document.select(selector).next() {
                texts[section.index()] = element_text(element);
            }
        }
        texts
    }
}
