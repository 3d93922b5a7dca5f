//! Application configuration.

use std::path::PathBuf;

use tracing::warn;

use crate::feed::{FeedConfig, default_gtfs_dir};

/// Station queried when none is given on the command line.
pub const DEFAULT_STATION: &str = "ADDISON STATION";

/// Trains shown per destination when not given on the command line.
pub const DEFAULT_PER_DESTINATION: usize = 2;

/// Environment variable overriding the feed URL.
pub const FEED_URL_VAR: &str = "NEXT_TRAIN_FEED_URL";
/// Environment variable overriding the GTFS directory.
pub const GTFS_DIR_VAR: &str = "NEXT_TRAIN_GTFS_DIR";
/// Environment variable overriding the default station.
pub const STATION_VAR: &str = "NEXT_TRAIN_STATION";
/// Environment variable overriding where the archive is saved.
pub const ARCHIVE_PATH_VAR: &str = "NEXT_TRAIN_ARCHIVE_PATH";
/// Environment variable overriding the download timeout, in seconds.
pub const TIMEOUT_VAR: &str = "NEXT_TRAIN_TIMEOUT_SECS";

/// Top-level configuration for the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the feed is fetched from and stored
    pub feed: FeedConfig,
    /// Station used when none is requested
    pub default_station: String,
    /// Trains per destination used when none is requested
    pub default_per_destination: usize,
}

impl AppConfig {
    /// Build the configuration from defaults overridden by the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration using `lookup` to read overrides.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gtfs_dir = get(GTFS_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_gtfs_dir);
        let mut feed = FeedConfig::new(gtfs_dir);
        if let Some(url) = get(FEED_URL_VAR) {
            feed = feed.with_feed_url(url);
        }
        if let Some(path) = get(ARCHIVE_PATH_VAR) {
            feed = feed.with_download_path(path);
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => feed = feed.with_timeout(secs),
                _ => warn!(var = TIMEOUT_VAR, value = %raw, "Ignoring invalid timeout"),
            }
        }

        Self {
            feed,
            default_station: get(STATION_VAR).unwrap_or_else(|| DEFAULT_STATION.to_string()),
            default_per_destination: DEFAULT_PER_DESTINATION,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
