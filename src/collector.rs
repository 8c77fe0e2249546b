//! The article collector: fetch, parse, paginate.
//!
//! [`Collector::collect`] walks the listing starting at a fixed endpoint:
//!
//! 1. Fetch the current page.
//! 2. Turn every feed item block into a record, in document order, skipping
//!    blocks that miss an element. Stop as soon as `limit` records are held,
//!    without fetching anything else or looking at the remaining blocks.
//! 3. Once the page is exhausted, follow its "load more" link. No link means
//!    the feed is over and the (possibly short) result is returned.
//!
//! Pages are fetched strictly one after the other. There is no retry and no
//! deduplication: if a continuation link leads back to a page already seen,
//! its articles are collected again.

use crate::error::CollectError;
use crate::models::ArticleRecord;
use crate::scrapers::feed::{scan_page, FeedSelectors};
use crate::scrapers::source::{HttpPageSource, PageSource};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Listing endpoint the collection starts from.
pub const DEFAULT_START_URL: &str = "https://g1.globo.com/ultimas-noticias/";

/// Identifying header sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:141.0) Gecko/20100101 Firefox/141.0";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for an HTTP-backed [`Collector`].
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub start_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Owns the fetch-parse-paginate loop over a [`PageSource`].
pub struct Collector<S> {
    source: S,
    selectors: FeedSelectors,
    start_url: String,
}

impl Collector<HttpPageSource> {
    /// Build a collector that fetches pages over HTTP.
    pub fn from_config(config: &CollectorConfig) -> Result<Self, CollectError> {
        let source = HttpPageSource::new(&config.user_agent, config.timeout)?;
        Self::new(source, config.start_url.clone())
    }
}

impl<S: PageSource> Collector<S> {
    pub fn new(source: S, start_url: impl Into<String>) -> Result<Self, CollectError> {
        Ok(Self {
            source,
            selectors: FeedSelectors::new()?,
            start_url: start_url.into(),
        })
    }

    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    /// Collect up to `limit` articles, in page and document order.
    ///
    /// A result shorter than `limit` is not an error: it means the feed ran
    /// out of continuation links first. `limit == 0` returns immediately
    /// without fetching.
    ///
    /// # Errors
    ///
    /// - [`CollectError::Fetch`] if any page cannot be fetched.
    /// - [`CollectError::Collection`] if a consumed feed item or the load-more
    ///   control has an element without its `href` / `src` attribute.
    ///
    /// Either way nothing collected so far is returned.
    #[instrument(level = "info", skip(self), fields(start_url = %self.start_url))]
    pub async fn collect(&self, limit: usize) -> Result<Vec<ArticleRecord>, CollectError> {
        info!("Starting collection of latest news");

        let mut url = self.start_url.clone();
        let mut records: Vec<ArticleRecord> = Vec::new();

        'pages: while records.len() < limit {
            debug!(%url, "Requesting listing page");
            let body = match self.source.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    error!(error = %e, url = %e.url(), "Page fetch failed; aborting collection");
                    return Err(e.into());
                }
            };

            let scan = scan_page(&body, &self.selectors);
            debug!(%url, blocks = scan.items.len(), "Found feed items on page");

            for (index, item) in scan.items.into_iter().enumerate() {
                let record = match item {
                    Ok(Some(record)) => record,
                    Ok(None) => {
                        debug!(index, "Feed item is missing a required element; skipping");
                        continue;
                    }
                    Err(e) => {
                        error!(error = %e, %url, index, "Unexpected feed item markup; aborting collection");
                        return Err(e);
                    }
                };

                info!(title = %record.title, "Collected article");
                records.push(record);

                if records.len() >= limit {
                    break 'pages;
                }
            }

            match scan.next_page {
                Ok(Some(next)) => {
                    debug!(next_page = %next, "Following load-more link");
                    url = next;
                }
                Ok(None) => {
                    debug!("No load-more link on page; finishing collection");
                    break;
                }
                Err(e) => {
                    error!(error = %e, %url, "Unexpected load-more markup; aborting collection");
                    return Err(e);
                }
            }
        }

        info!(count = records.len(), limit, "Collection finished");
        Ok(records)
    }
}
