//! Basic information about a loaded feed, shown after a refresh.

use std::fmt;

use serde::Serialize;

use crate::render::format_table;

use super::records::{Route, Stop, StopTime, Trip};
use super::repository::FeedRepository;

/// Default number of rows previewed per table.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Row counts and the first few rows of each table.
#[derive(Debug, Clone, Serialize)]
pub struct FeedSummary {
    pub stop_count: usize,
    pub route_count: usize,
    pub trip_count: usize,
    pub stop_time_count: usize,
    pub calendar_count: usize,
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
}

impl FeedSummary {
    /// Summarize `feed`, keeping at most `preview_rows` rows per table.
    pub fn from_feed(feed: &impl FeedRepository, preview_rows: usize) -> Self {
        fn head<T: Clone>(rows: &[T], n: usize) -> Vec<T> {
            rows.iter().take(n).cloned().collect()
        }

        Self {
            stop_count: feed.stops().len(),
            route_count: feed.routes().len(),
            trip_count: feed.trips().len(),
            stop_time_count: feed.stop_times().len(),
            calendar_count: feed.calendar().len(),
            stops: head(feed.stops(), preview_rows),
            routes: head(feed.routes(), preview_rows),
            trips: head(feed.trips(), preview_rows),
            stop_times: head(feed.stop_times(), preview_rows),
        }
    }
}

impl fmt::Display for FeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stops ({} rows):", self.stop_count)?;
        let rows: Vec<Vec<String>> = self
            .stops
            .iter()
            .map(|s| vec![s.stop_id.clone(), s.stop_name.clone()])
            .collect();
        f.write_str(&format_table(&["stop_id", "stop_name"], &rows))?;

        writeln!(f, "Routes ({} rows):", self.route_count)?;
        let rows: Vec<Vec<String>> = self
            .routes
            .iter()
            .map(|r| {
                vec![
                    r.route_id.clone(),
                    r.route_short_name.clone().unwrap_or_default(),
                    r.route_long_name.clone().unwrap_or_default(),
                ]
            })
            .collect();
        f.write_str(&format_table(
            &["route_id", "route_short_name", "route_long_name"],
            &rows,
        ))?;

        writeln!(f, "Trips ({} rows):", self.trip_count)?;
        let rows: Vec<Vec<String>> = self
            .trips
            .iter()
            .map(|t| {
                vec![
                    t.route_id.clone(),
                    t.service_id.clone(),
                    t.trip_id.clone(),
                    t.trip_headsign.clone(),
                ]
            })
            .collect();
        f.write_str(&format_table(
            &["route_id", "service_id", "trip_id", "trip_headsign"],
            &rows,
        ))?;

        writeln!(f, "Stop Times ({} rows):", self.stop_time_count)?;
        let rows: Vec<Vec<String>> = self
            .stop_times
            .iter()
            .map(|st| {
                vec![
                    st.trip_id.clone(),
                    st.arrival_time.clone(),
                    st.departure_time.clone(),
                    st.stop_id.clone(),
                ]
            })
            .collect();
        f.write_str(&format_table(
            &["trip_id", "arrival_time", "departure_time", "stop_id"],
            &rows,
        ))?;

        write!(f, "Calendar: {} services", self.calendar_count)
    }
}
