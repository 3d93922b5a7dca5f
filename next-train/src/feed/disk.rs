//! Loading the extracted feed tables from disk.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::client::{FeedClient, RefreshReport};
use super::error::FeedError;
use super::records::{CalendarEntry, Route, Stop, StopTime, Trip};
use super::repository::{FeedRepository, FeedTables};

pub const STOPS_FILE: &str = "stops.txt";
pub const ROUTES_FILE: &str = "routes.txt";
pub const TRIPS_FILE: &str = "trips.txt";
pub const STOP_TIMES_FILE: &str = "stop_times.txt";
pub const CALENDAR_FILE: &str = "calendar.txt";

/// Feed tables read from a directory of extracted GTFS files.
#[derive(Debug, Clone)]
pub struct DiskFeed {
    dir: PathBuf,
    tables: FeedTables,
}

impl DiskFeed {
    /// Read all five tables from `dir`.
    ///
    /// Fails on the first file that is missing or has a malformed row.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, FeedError> {
        let dir = dir.into();
        let tables = load_tables(&dir)?;
        Ok(Self { dir, tables })
    }

    /// Re-read the tables from the same directory.
    ///
    /// On failure the previously loaded tables are kept.
    pub fn reload(&mut self) -> Result<(), FeedError> {
        self.tables = load_tables(&self.dir)?;
        Ok(())
    }

    /// Download and extract a fresh archive, then reload from it.
    pub async fn refresh(&mut self, client: &FeedClient) -> Result<RefreshReport, FeedError> {
        let report = client.refresh().await?;
        self.reload()?;
        Ok(report)
    }

    /// Directory the tables were read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The loaded tables.
    pub fn tables(&self) -> &FeedTables {
        &self.tables
    }
}

impl FeedRepository for DiskFeed {
    fn stops(&self) -> &[Stop] {
        &self.tables.stops
    }

    fn stop_times(&self) -> &[StopTime] {
        &self.tables.stop_times
    }

    fn trips(&self) -> &[Trip] {
        &self.tables.trips
    }

    fn calendar(&self) -> &[CalendarEntry] {
        &self.tables.calendar
    }

    fn routes(&self) -> &[Route] {
        &self.tables.routes
    }
}

fn load_tables(dir: &Path) -> Result<FeedTables, FeedError> {
    let stops = read_table::<Stop>(dir, STOPS_FILE)?;
    let routes = read_table::<Route>(dir, ROUTES_FILE)?;
    let trips = read_table::<Trip>(dir, TRIPS_FILE)?;
    let stop_times = read_table::<StopTime>(dir, STOP_TIMES_FILE)?;
    let calendar = read_table::<CalendarEntry>(dir, CALENDAR_FILE)?;

    Ok(FeedTables {
        stops,
        routes,
        trips,
        stop_times,
        calendar,
    })
}

/// Deserialize every row of one GTFS file.
///
/// Header names are trimmed; field values are kept as published, so a
/// padded stop name does not match its unpadded form.
fn read_table<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<Vec<T>, FeedError> {
    let path = dir.join(file);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(&path)
        .map_err(|source| FeedError::Csv { file, source })?;

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| FeedError::Csv { file, source })?;

    info!(file, count = rows.len(), "Loaded GTFS table");
    Ok(rows)
}
