//! Run configuration
//!
//! Everything the pipeline needs to know about one run: where the directory
//! lives, where the output goes and how pages are fetched.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// Directory page scraped when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://www.1mg.com/all-diseases";

/// Output file written when no path is configured
pub const DEFAULT_OUTPUT: &str = "diseases_data.csv";

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const MAX_URL_LEN: usize = 2048;

/// What to do with an FAQ block that lacks a question or an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaqPolicy {
    /// Drop only the malformed entry and keep the rest of the record
    #[default]
    SkipEntry,
    /// Fail the whole page, so the disease is left out of the output
    DropDisease,
}

impl FaqPolicy {
    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            FaqPolicy::SkipEntry => "skip-entry",
            FaqPolicy::DropDisease => "drop-disease",
        }
    }
}

impl FromStr for FaqPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "skip-entry" => Ok(FaqPolicy::SkipEntry),
            "drop-disease" => Ok(FaqPolicy::DropDisease),
            other => Err(format!(
                "unknown FAQ policy '{}' (expected skip-entry or drop-disease)",
                other
            )),
        }
    }
}

/// Configuration for one scrape run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Directory page listing every disease
    pub base_url: String,
    /// CSV file receiving one row per disease
    pub output: PathBuf,
    /// Optional CSV file receiving one row per FAQ entry
    pub faq_output: Option<PathBuf>,
    /// Per-request timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// User agent string (None = client default)
    pub user_agent: Option<String>,
    /// Handling of malformed FAQ blocks
    pub faq_policy: FaqPolicy,
    /// Visit at most this many detail pages
    pub limit: Option<usize>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            faq_output: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: None,
            faq_policy: FaqPolicy::default(),
            limit: None,
        }
    }
}

impl ScrapeConfig {
    /// Create a new config builder
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }

    /// Check the config before any request is made
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.base_url)?;
        if self.timeout_ms == 0 {
            return Err(Error::config("timeout must be greater than zero"));
        }
        if self.faq_output.as_ref() == Some(&self.output) {
            return Err(Error::config(format!(
                "FAQ output and record output are the same file: {}",
                self.output.display()
            )));
        }
        Ok(())
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::config("base URL cannot be empty"));
    }
    if url.len() > MAX_URL_LEN {
        return Err(Error::config(format!(
            "base URL exceeds maximum length of {} characters",
            MAX_URL_LEN
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| Error::config(format!("base URL '{}' is not valid: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::config(format!(
            "base URL must use http or https, got '{}'",
            scheme
        ))),
    }
}

/// Builder for ScrapeConfig
#[derive(Default)]
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfigBuilder {
    /// Set the directory page URL
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the record output path
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.output = path.into();
        self
    }

    /// Also write the normalized FAQ table to this path
    pub fn faq_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.faq_output = Some(path.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set user agent
    pub fn user_agent<S: Into<String>>(mut self, ua: S) -> Self {
        self.config.user_agent = Some(ua.into());
        self
    }

    /// Set the malformed FAQ policy
    pub fn faq_policy(mut self, policy: FaqPolicy) -> Self {
        self.config.faq_policy = policy;
        self
    }

    /// Cap the number of detail pages visited
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Build the config
    pub fn build(self) -> ScrapeConfig {
        self.config
    }
}
