//! In-memory fetcher for tests and offline runs.

use super::PageFetcher;
use crate::error::{FetchError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Canned response for one URL
#[derive(Debug, Clone)]
struct MockResponse {
    status: u16,
    body: String,
}

/// Fetcher answering from a fixed URL table.
///
/// URLs without an entry answer 404. Every request is recorded so tests can
/// check which pages were visited and in which order.
///
/// ```rust
/// use disease_scraper::fetch::MockFetcher;
///
/// let fetcher = MockFetcher::new()
///     .with_page("https://example.com/all-diseases", "<ul></ul>")
///     .with_status("https://example.com/d/flu", 500);
/// assert_eq!(fetcher.call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a fetcher with no pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` with status 200 at `url`
    pub fn add_page(&self, url: impl Into<String>, html: impl Into<String>) {
        self.responses.write().insert(
            url.into(),
            MockResponse {
                status: 200,
                body: html.into(),
            },
        );
    }

    /// Answer `url` with `status` and an empty body
    pub fn add_status(&self, url: impl Into<String>, status: u16) {
        self.responses.write().insert(
            url.into(),
            MockResponse {
                status,
                body: String::new(),
            },
        );
    }

    /// Builder form of [`MockFetcher::add_page`]
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// Builder form of [`MockFetcher::add_status`]
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.add_status(url, status);
        self
    }

    /// URLs requested so far, in request order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().clone()
    }

    /// Number of requests made so far
    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        self.calls.write().push(url.to_string());

        let response = self.responses.read().get(url).cloned();
        match response {
            Some(MockResponse { status, body }) if (200..300).contains(&status) => Ok(body),
            Some(MockResponse { status, .. }) => Err(FetchError::HttpError {
                status,
                url: url.to_string(),
            }
            .into()),
            None => Err(FetchError::HttpError {
                status: 404,
                url: url.to_string(),
            }
            .into()),
        }
    }
}
