//! GTFS feed access.
//!
//! Downloads the static feed archive, unpacks it into a local directory and
//! loads the five tables the departure query needs into typed records.
//! All I/O in the crate happens here; everything downstream works on the
//! tables through [`FeedRepository`].

mod client;
mod config;
mod disk;
mod error;
mod extract;
mod records;
mod repository;
mod summary;

pub use client::{FeedClient, RefreshReport};
pub use config::{DEFAULT_FEED_URL, FeedConfig, default_gtfs_dir};
pub use disk::{
    CALENDAR_FILE, DiskFeed, ROUTES_FILE, STOP_TIMES_FILE, STOPS_FILE, TRIPS_FILE,
};
pub use error::FeedError;
pub use extract::extract_archive;
pub use records::{CalendarEntry, Route, Stop, StopTime, Trip};
pub use repository::{FeedRepository, FeedTables};
pub use summary::{DEFAULT_PREVIEW_ROWS, FeedSummary};
