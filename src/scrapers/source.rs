//! Page retrieval.
//!
//! [`PageSource`] is the seam between the pagination loop and the network:
//! the collector only ever asks for the body of a URL. [`HttpPageSource`] is
//! the real implementation on top of `reqwest`.

use crate::error::{CollectError, FetchError};
use std::time::Duration;
use tracing::{debug, instrument};

/// Something that can hand back the markup of a listing page.
pub trait PageSource {
    /// Fetch the body of `url`.
    ///
    /// Any failure to obtain a successful response is a [`FetchError`].
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP page source with a fixed `User-Agent` and per-request timeout.
///
/// There is no retry: a failed request is reported as is.
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    /// Build the underlying client.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Collection`] if the TLS backend or client
    /// configuration cannot be initialized.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, CollectError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| CollectError::Collection {
                reason: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Requesting page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        debug!(bytes = body.len(), status = status.as_u16(), "Fetched page");
        Ok(body)
    }
}
