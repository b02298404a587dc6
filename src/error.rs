//! Error types shared by the fetcher and the generators
//!
//! Every failure aborts the current run. Nothing here is retried; the caller
//! (usually a scheduled job) decides what to do with a non-zero exit.

use std::path::PathBuf;

/// Errors that can occur while fetching or rendering project data
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing, invalid or expired credential
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Non-2xx response from the GitHub API other than an auth failure
    #[error("GitHub API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport-level failure (connect, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// File read/write failure
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record store holds data that does not match the expected shape
    #[error("Invalid record in {store}: {message}")]
    InvalidRecord { store: String, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_record(store: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidRecord {
            store: store.into(),
            message: message.to_string(),
        }
    }

    /// HTTP status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
