//! Error types for collection and export.
//!
//! Collection failures come in two flavours that callers must be able to
//! tell apart:
//!
//! - [`CollectError::Fetch`]: a page could not be retrieved (transport error,
//!   timeout or non-success status).
//! - [`CollectError::Collection`]: anything else that went wrong while
//!   turning pages into records.
//!
//! Both abort the whole collection cycle; no partial result is returned.
//! Writing exports fails with [`ExportError`], which never touches records
//! already held in memory.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve a single page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body decoding failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// URL of the page that could not be fetched.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}

/// Terminal failure of a collection cycle.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("fetch failure: {0}")]
    Fetch(#[from] FetchError),

    #[error("collection failure: {reason}")]
    Collection { reason: String },
}

/// Failure to write a text or CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
