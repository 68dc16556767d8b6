//! Directory → detail pages → CSV
//!
//! One run of the scraper: fetch the directory, visit each detail page in
//! order, then write the records (and optionally the FAQ table).

use crate::config::ScrapeConfig;
use crate::directory::DirectoryFetcher;
use crate::error::Result;
use crate::export::{FaqRow, TabularWriter};
use crate::extraction::DetailExtractor;
use crate::fetch::{HttpFetcher, PageFetcher};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

/// Outcome of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Diseases listed on the directory; `None` when it could not be fetched
    pub listed: Option<usize>,
    /// Detail pages turned into records
    pub extracted: usize,
    /// Why the directory could not be fetched
    pub directory_error: Option<String>,
    /// Diseases skipped because their page failed
    pub failed: Vec<String>,
    /// `"<disease>: <error>"` for every skipped disease
    pub failure_reasons: Vec<String>,
    /// Data rows written to the record file
    pub rows_written: usize,
    /// Record file, when one was written
    pub output: Option<PathBuf>,
    /// Data rows written to the FAQ file
    pub faq_rows_written: usize,
    /// FAQ file, when one was written
    pub faq_output: Option<PathBuf>,
}

impl RunSummary {
    /// Whether the directory page was retrieved
    pub fn directory_fetched(&self) -> bool {
        self.listed.is_some()
    }
}

/// The scrape pipeline bound to a config and a page source
pub struct Pipeline<F> {
    config: ScrapeConfig,
    fetcher: F,
}

impl Pipeline<HttpFetcher> {
    /// Pipeline fetching over HTTP
    pub fn from_config(config: ScrapeConfig) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config)?;
        Ok(Self::new(config, fetcher))
    }
}

impl<F: PageFetcher> Pipeline<F> {
    /// Pipeline using `fetcher` for every request
    pub fn new(config: ScrapeConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Active configuration
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Run all three stages.
    ///
    /// A directory that cannot be fetched is not an error: the run stops,
    /// no file is written and [`RunSummary::listed`] is `None`. Errors are
    /// reserved for invalid configuration and failed writes.
    pub async fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;
        let started = Instant::now();
        let mut summary = RunSummary::default();

        let fetched = DirectoryFetcher::try_fetch(&self.fetcher, &self.config.base_url).await;
        let mut index = match fetched {
            Ok(index) => index,
            Err(e) => {
                error!("Failed to fetch disease URLs: {}", e);
                summary.directory_error = Some(e.to_string());
                return Ok(summary);
            }
        };
        summary.listed = Some(index.len());

        if let Some(limit) = self.config.limit {
            if index.len() > limit {
                info!("Limiting run to the first {} of {} diseases", limit, index.len());
                index.truncate(limit);
            }
        }

        let extractor = DetailExtractor::new(self.config.faq_policy)?;
        let batch = extractor.extract_all(&self.fetcher, &index.entries()).await;
        summary.extracted = batch.records.len();
        summary.failed = batch.failed_names();
        summary.failure_reasons = batch
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.name, f.error))
            .collect();

        let writer = TabularWriter::new(&self.config.output);
        summary.rows_written = writer.write(&batch.records)?;
        if summary.rows_written > 0 {
            summary.output = Some(self.config.output.clone());
        }

        if let Some(faq_path) = &self.config.faq_output {
            let faq_rows: Vec<FaqRow> = batch.records.iter().flat_map(|r| r.faq_rows()).collect();
            summary.faq_rows_written = TabularWriter::new(faq_path).write(&faq_rows)?;
            if summary.faq_rows_written > 0 {
                summary.faq_output = Some(faq_path.clone());
            }
        }

        info!(
            "Run finished in {:.1}s: {} saved, {} failed",
            started.elapsed().as_secs_f64(),
            summary.rows_written,
            summary.failed.len()
        );
        Ok(summary)
    }
}
