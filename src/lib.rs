//! Disease Scraper - directory-to-CSV extraction of disease information pages
//!
//! This crate scrapes a health-content site in one linear batch: it reads the
//! disease directory, visits every detail page, extracts a fixed record per
//! disease and writes all records to a CSV file.
//!
//! # Architecture
//!
//! ```text
//! Directory page ──▶ DirectoryFetcher ──▶ DiseaseIndex (name → URL, ordered)
//!                                              │
//!                                              ▼
//!                    Detail pages ──▶ DetailExtractor ──▶ Vec<DiseaseRecord>
//!                                                               │
//!                                                               ▼
//!                                          TabularWriter ──▶ diseases_data.csv
//! ```
//!
//! Every request goes through a [`PageFetcher`]; requests are issued one at
//! a time and a failing detail page only drops that disease.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use disease_scraper::{Pipeline, ScrapeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScrapeConfig::builder()
//!         .output("diseases_data.csv")
//!         .build();
//!
//!     let summary = Pipeline::from_config(config)?.run().await?;
//!     println!("Saved {} diseases", summary.rows_written);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod extraction;
pub mod fetch;
pub mod pipeline;

// Re-exports for convenience
pub use config::{FaqPolicy, ScrapeConfig};
pub use directory::{DirectoryFetcher, DiseaseIndex, DiseaseIndexEntry};
pub use error::{Error, Result};
pub use export::{TableRow, TabularWriter};
pub use extraction::{DetailExtractor, DiseaseRecord, FaqEntry, Section};
pub use fetch::{HttpFetcher, MockFetcher, PageFetcher};
pub use pipeline::{Pipeline, RunSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
