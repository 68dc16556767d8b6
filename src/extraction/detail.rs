//! Detail page extraction
//!
//! [`DetailExtractor`] visits every directory entry in order, one request at
//! a time, and isolates failures per disease: a page that cannot be fetched
//! or parsed is reported and skipped, the rest of the batch goes on.

use super::{DiseaseRecord, FaqExtractor, ReferenceExtractor, SectionExtractor};
use crate::config::FaqPolicy;
use crate::directory::DiseaseIndexEntry;
use crate::error::{Error, ExtractionError, Result};
use crate::fetch::PageFetcher;
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// A disease left out of the batch, with the reason
#[derive(Debug)]
pub struct PageFailure {
    /// Display name from the directory
    pub name: String,
    /// Detail page URL
    pub url: String,
    /// What went wrong
    pub error: Error,
}

/// Result of visiting a list of detail pages
#[derive(Debug, Default)]
pub struct ExtractionBatch {
    /// Successfully extracted records, in directory order
    pub records: Vec<DiseaseRecord>,
    /// Skipped diseases, in directory order
    pub failures: Vec<PageFailure>,
}

impl ExtractionBatch {
    /// Names of the skipped diseases
    pub fn failed_names(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.name.clone()).collect()
    }
}

/// Builds [`DiseaseRecord`]s from detail pages
pub struct DetailExtractor {
    sections: SectionExtractor,
    faqs: FaqExtractor,
    references: ReferenceExtractor,
}

impl DetailExtractor {
    /// Compile every selector once for the whole batch
    pub fn new(faq_policy: FaqPolicy) -> Result<Self> {
        Ok(Self {
            sections: SectionExtractor::new()?,
            faqs: FaqExtractor::new(faq_policy)?,
            references: ReferenceExtractor::new()?,
        })
    }

    /// Extract the record of one already-fetched page
    pub fn extract(
        &self,
        name: &str,
        html: &str,
    ) -> std::result::Result<DiseaseRecord, ExtractionError> {
        let document = Html::parse_document(html);

        let faqs = self.faqs.extract(&document)?;
        let record = DiseaseRecord::new(name)
            .with_sections(self.sections.extract(&document))
            .with_faqs(faqs)
            .with_references(self.references.extract(&document));

        debug!(
            "{}: {} FAQs, {} references",
            name,
            record.faqs().len(),
            record.references().len()
        );
        Ok(record)
    }

    /// Fetch and extract one directory entry
    #[instrument(skip(self, fetcher, entry), fields(disease = %entry.name))]
    pub async fn fetch_one<F: PageFetcher + ?Sized>(
        &self,
        fetcher: &F,
        entry: &DiseaseIndexEntry,
    ) -> Result<DiseaseRecord> {
        let html = fetcher.fetch_html(&entry.url).await?;
        Ok(self.extract(&entry.name, &html)?)
    }

    /// Visit every entry sequentially.
    ///
    /// Never fails as a whole: each entry either yields a record or a
    /// [`PageFailure`].
    pub async fn extract_all<F: PageFetcher + ?Sized>(
        &self,
        fetcher: &F,
        entries: &[DiseaseIndexEntry],
    ) -> ExtractionBatch {
        let mut batch = ExtractionBatch::default();

        for (i, entry) in entries.iter().enumerate() {
            info!(
                "[{}/{}] Fetching details for {}",
                i + 1,
                entries.len(),
                entry.name
            );
            match self.fetch_one(fetcher, entry).await {
                Ok(record) => batch.records.push(record),
                Err(error) => {
                    warn!("Failed to fetch details for {}: {}", entry.name, error);
                    batch.failures.push(PageFailure {
                        name: entry.name.clone(),
                        url: entry.url.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            "Extracted {} of {} diseases ({} failed)",
            batch.records.len(),
            entries.len(),
            batch.failures.len()
        );
        batch
    }
}
