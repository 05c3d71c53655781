use std::path::PathBuf;
use thiserror::Error;

/// A failed network request. Never fatal to a run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout or body read error
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP status {status} for url ({url})")]
    Status { url: String, status: u16 },
}

/// Errors that abort a scrape run, or skip a single image download
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
