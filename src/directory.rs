//! Disease directory discovery
//!
//! The directory page lists every disease as a `li.disease-list-item` holding
//! a link to its detail page. This module turns that page into an ordered
//! [`DiseaseIndex`].

use crate::error::{FetchError, Result};
use crate::extraction::{element_text, parse_selector};
use crate::fetch::PageFetcher;
use indexmap::IndexMap;
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use url::Url;

const DISEASE_ITEM: &str = "li.disease-list-item";

/// One disease listed on the directory page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseIndexEntry {
    /// Trimmed text of the list item
    pub name: String,
    /// Absolute detail page URL
    pub url: String,
}

/// Ordered name-to-URL mapping of the directory.
///
/// Names are unique. Inserting a name again replaces its URL but keeps the
/// position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseIndex {
    urls: IndexMap<String, String>,
}

impl DiseaseIndex {
    /// Empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; a repeated name overwrites the earlier URL
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(name.into(), url.into());
    }

    /// URL listed for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.urls.get(name).map(String::as_str)
    }

    /// `(name, url)` pairs in directory order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.urls.iter().map(|(name, url)| (name.as_str(), url.as_str()))
    }

    /// Entries in directory order
    pub fn entries(&self) -> Vec<DiseaseIndexEntry> {
        self.urls
            .iter()
            .map(|(name, url)| DiseaseIndexEntry {
                name: name.clone(),
                url: url.clone(),
            })
            .collect()
    }

    /// Keep only the first `n` entries
    pub fn truncate(&mut self, n: usize) {
        self.urls.truncate(n);
    }

    /// Number of distinct diseases
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the directory listed nothing
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl IntoIterator for DiseaseIndex {
    type Item = DiseaseIndexEntry;
    type IntoIter = std::vec::IntoIter<DiseaseIndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls
            .into_iter()
            .map(|(name, url)| DiseaseIndexEntry { name, url })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Directory page retrieval and parsing
pub struct DirectoryFetcher;

impl DirectoryFetcher {
    /// Fetch the directory, reporting failure as absence.
    ///
    /// `None` means the page could not be retrieved; `Some` with an empty
    /// index means it was retrieved but listed no diseases.
    pub async fn fetch<F: PageFetcher + ?Sized>(
        fetcher: &F,
        base_url: &str,
    ) -> Option<DiseaseIndex> {
        match Self::try_fetch(fetcher, base_url).await {
            Ok(index) => Some(index),
            Err(e) => {
                error!("Failed to fetch disease URLs: {}", e);
                None
            }
        }
    }

    /// Fetch and parse the directory page
    #[instrument(skip(fetcher))]
    pub async fn try_fetch<F: PageFetcher + ?Sized>(
        fetcher: &F,
        base_url: &str,
    ) -> Result<DiseaseIndex> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let html = fetcher.fetch_html(base_url).await?;
        let index = Self::parse(&html, &base)?;

        info!("Found {} diseases on {}", index.len(), base_url);
        Ok(index)
    }

    /// Parse a directory page, resolving links against `base`
    pub fn parse(html: &str, base: &Url) -> Result<DiseaseIndex> {
        let items = parse_selector(DISEASE_ITEM)?;
        let anchor = parse_selector("a")?;
        let document = Html::parse_document(html);
        let mut index = DiseaseIndex::new();

        for item in document.select(&items) {
            let name = element_text(item);
            let Some(href) = item
                .select(&anchor)
                .next()
                .and_then(|a| a.value().attr("href"))
            else {
                warn!("Skipping directory item '{}' without a link", name);
                continue;
            };

            match base.join(href) {
                Ok(url) => index.insert(name, url.to_string()),
                Err(e) => warn!(
                    "Skipping directory item '{}': bad link '{}': {}",
                    name, href, e
                ),
            }
        }

        Ok(index)
    }
}
