//! Feed error types.

use std::path::PathBuf;

/// Errors that can occur while fetching, extracting or loading a GTFS feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed server returned an error status
    #[error("failed to download GTFS data: {status}")]
    Api { status: u16, message: String },

    /// Local file operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The downloaded archive could not be read
    #[error("invalid feed archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An archive entry would be written outside the extraction directory
    #[error("archive entry {name:?} escapes the extraction directory")]
    UnsafeEntry { name: String },

    /// A feed table could not be parsed
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },
}

impl FeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FeedError::Io {
            path: path.into(),
            source,
        }
    }
}
