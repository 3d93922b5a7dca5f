//! Next-departure query.
//!
//! Answers "when are the next trains at this station?" over a snapshot of
//! the feed tables. The query is pure: it borrows the tables, never
//! mutates them, and performs no I/O.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::domain::ClockTime;
use crate::feed::{FeedRepository, StopTime, Trip};

use super::calendar::ServiceCalendar;

/// Error from a departure query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No stop in the feed carries this name
    #[error("No station found with name: {0}")]
    StationNotFound(String),

    /// Invalid query parameters
    #[error("invalid query: {0}")]
    InvalidRequest(String),
}

/// An upcoming arrival at the queried station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    pub stop_id: String,
    pub trip_id: String,
    pub arrival_time: ClockTime,
    /// Departure time as published in the feed.
    pub departure_time: String,
    pub route_id: String,
    pub trip_headsign: String,
}

/// Result of a successful station lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureBoard {
    /// The station name as queried.
    pub station: String,
    /// Every stop id carrying that name, in feed order.
    pub stop_ids: Vec<String>,
    /// Upcoming departures, soonest first.
    pub departures: Vec<Departure>,
}

impl DepartureBoard {
    /// True if the station exists but nothing is due today.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

/// A stop time that survived filtering, with its position in the feed.
struct Candidate<'a> {
    seq: usize,
    arrival: ClockTime,
    stop_time: &'a StopTime,
    trip: &'a Trip,
}

impl Candidate<'_> {
    fn sort_key(&self) -> (ClockTime, usize) {
        (self.arrival, self.seq)
    }

    fn into_departure(self) -> Departure {
        Departure {
            stop_id: self.stop_time.stop_id.clone(),
            trip_id: self.stop_time.trip_id.clone(),
            arrival_time: self.arrival,
            departure_time: self.stop_time.departure_time.clone(),
            route_id: self.trip.route_id.clone(),
            trip_headsign: self.trip.trip_headsign.clone(),
        }
    }
}

/// Find the next `per_destination` arrivals for each headsign at a station.
///
/// The station is every stop whose name equals `station_name` exactly.
/// Stop times are kept when their arrival parses as a same-day
/// `HH:MM:SS`, their trip exists and runs on `now`'s weekday, they
/// arrive strictly after `now`'s time of day, and the trip has a
/// non-blank headsign. Rows failing any of those checks are skipped,
/// never reported.
///
/// The result is ordered by arrival time; equal times keep feed order.
///
/// Returns `QueryError::StationNotFound` if no stop has that name, which
/// is distinct from a found station with an empty board.
pub fn next_departures(
    feed: &impl FeedRepository,
    station_name: &str,
    per_destination: usize,
    now: NaiveDateTime,
) -> Result<DepartureBoard, QueryError> {
    if per_destination == 0 {
        return Err(QueryError::InvalidRequest(
            "trains per destination must be at least 1".to_string(),
        ));
    }

    let stop_ids: Vec<String> = feed
        .stops()
        .iter()
        .filter(|stop| stop.stop_name == station_name)
        .map(|stop| stop.stop_id.clone())
        .collect();

    if stop_ids.is_empty() {
        return Err(QueryError::StationNotFound(station_name.to_string()));
    }

    let calendar = ServiceCalendar::for_day(feed.calendar(), now.weekday());
    if calendar.is_empty() {
        debug!(
            station = station_name,
            day = %calendar.day(),
            "No services run today"
        );
        return Ok(DepartureBoard {
            station: station_name.to_string(),
            stop_ids,
            departures: Vec::new(),
        });
    }

    let station: HashSet<&str> = stop_ids.iter().map(String::as_str).collect();

    // First row wins if a trip id is repeated.
    let mut trips: HashMap<&str, &Trip> = HashMap::with_capacity(feed.trips().len());
    for trip in feed.trips() {
        trips.entry(trip.trip_id.as_str()).or_insert(trip);
    }

    let now_time = now.time();

    let mut at_station = 0usize;
    let mut unparseable = 0usize;
    let mut no_trip = 0usize;
    let mut inactive = 0usize;
    let mut past = 0usize;
    let mut no_headsign = 0usize;

    let mut by_headsign: HashMap<&str, Vec<Candidate>> = HashMap::new();

    for (seq, stop_time) in feed.stop_times().iter().enumerate() {
        if !station.contains(stop_time.stop_id.as_str()) {
            continue;
        }
        at_station += 1;

        let Ok(arrival) = ClockTime::parse_hhmmss(&stop_time.arrival_time) else {
            unparseable += 1;
            continue;
        };

        let Some(&trip) = trips.get(stop_time.trip_id.as_str()) else {
            no_trip += 1;
            continue;
        };

        if !calendar.is_active(&trip.service_id) {
            inactive += 1;
            continue;
        }

        if !arrival.is_after(now_time) {
            past += 1;
            continue;
        }

        // A trip without a destination has no group to go in.
        if trip.trip_headsign.trim().is_empty() {
            no_headsign += 1;
            continue;
        }

        by_headsign
            .entry(trip.trip_headsign.as_str())
            .or_default()
            .push(Candidate {
                seq,
                arrival,
                stop_time,
                trip,
            });
    }

    let destinations = by_headsign.len();
    let mut kept: Vec<Candidate> = by_headsign
        .into_values()
        .flat_map(|mut group| {
            group.sort_by_key(Candidate::sort_key);
            group.truncate(per_destination);
            group
        })
        .collect();
    kept.sort_by_key(Candidate::sort_key);

    debug!(
        station = station_name,
        stop_ids = stop_ids.len(),
        day = %calendar.day(),
        active_services = calendar.len(),
        at_station,
        unparseable,
        no_trip,
        inactive,
        past,
        no_headsign,
        destinations,
        kept = kept.len(),
        "Computed next departures"
    );

    Ok(DepartureBoard {
        station: station_name.to_string(),
        stop_ids,
        departures: kept.into_iter().map(Candidate::into_departure).collect(),
    })
}
