//! Page retrieval
//!
//! Every network access of the pipeline goes through [`PageFetcher`], so the
//! stages can run against the live site or against canned pages.

pub mod client;
pub mod mock;

pub use client::HttpFetcher;
pub use mock::MockFetcher;

use crate::error::Result;
use async_trait::async_trait;

/// Source of HTML pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return its body.
    ///
    /// Transport failures and non-2xx statuses are errors; the body of a
    /// failed response is never returned.
    async fn fetch_html(&self, url: &str) -> Result<String>;
}
