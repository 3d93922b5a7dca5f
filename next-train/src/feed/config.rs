//! Feed location configuration.

use std::path::{Path, PathBuf};

/// Default URL of the DART static GTFS archive.
pub const DEFAULT_FEED_URL: &str = "https://www.dart.org/transitdata/latest/google_transit.zip";

/// File name the archive is saved under, inside the GTFS directory.
const ARCHIVE_FILE_NAME: &str = "dart_gtfs.zip";

/// Default request timeout. The archive is tens of megabytes.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Where the feed comes from and where it lives on disk.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL of the GTFS zip archive
    pub feed_url: String,
    /// Local path the downloaded archive is written to
    pub download_path: PathBuf,
    /// Directory the archive is extracted into and tables are read from
    pub extract_path: PathBuf,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a config that keeps the archive and its tables under `gtfs_dir`.
    pub fn new(gtfs_dir: impl Into<PathBuf>) -> Self {
        let extract_path = gtfs_dir.into();
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            download_path: extract_path.join(ARCHIVE_FILE_NAME),
            extract_path,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom feed URL.
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set a custom archive path.
    pub fn with_download_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.download_path = path.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Directory the tables are read from.
    pub fn extract_path(&self) -> &Path {
        &self.extract_path
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(default_gtfs_dir())
    }
}

/// `~/Documents/GTFS`, falling back to `./GTFS` when no home is set.
pub fn default_gtfs_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join("Documents").join("GTFS"))
        .unwrap_or_else(|| PathBuf::from("GTFS"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FeedConfig::new("/data/gtfs");
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.extract_path, PathBuf::from("/data/gtfs"));
        assert_eq!(
            config.download_path,
            PathBuf::from("/data/gtfs/dart_gtfs.zip")
        );
        assert_eq!(config.timeout_secs, 300);
    }

    #[test]
    fn config_builder() {
        let config = FeedConfig::new("/data/gtfs")
            .with_feed_url("http://localhost:8080/feed.zip")
            .with_download_path("/tmp/feed.zip")
            .with_timeout(10);

        assert_eq!(config.feed_url, "http://localhost:8080/feed.zip");
        assert_eq!(config.download_path, PathBuf::from("/tmp/feed.zip"));
        assert_eq!(config.extract_path(), Path::new("/data/gtfs"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn default_dir_ends_in_gtfs() {
        assert!(default_gtfs_dir().ends_with("GTFS"));
    }
}
