//! Typed rows of the GTFS text files.
//!
//! Columns are matched by header name; columns not listed here are ignored.

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

/// A row of `stops.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
}

/// A row of `routes.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: Option<String>,
    #[serde(default)]
    pub route_long_name: Option<String>,
}

/// A row of `trips.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    /// Destination label shown on the vehicle. Optional in GTFS.
    #[serde(default)]
    pub trip_headsign: String,
}

/// A row of `stop_times.txt`.
///
/// Times are kept as published. They may be empty (non-timepoint stops) or
/// exceed 23:59:59 for trips running past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: String,
}

/// A row of `calendar.txt`: the weekly pattern a service runs on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalendarEntry {
    pub service_id: String,
    #[serde(deserialize_with = "day_flag")]
    pub monday: bool,
    #[serde(deserialize_with = "day_flag")]
    pub tuesday: bool,
    #[serde(deserialize_with = "day_flag")]
    pub wednesday: bool,
    #[serde(deserialize_with = "day_flag")]
    pub thursday: bool,
    #[serde(deserialize_with = "day_flag")]
    pub friday: bool,
    #[serde(deserialize_with = "day_flag")]
    pub saturday: bool,
    #[serde(deserialize_with = "day_flag")]
    pub sunday: bool,
}

impl CalendarEntry {
    /// Whether this service runs on the given weekday.
    pub fn runs_on(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// GTFS day columns hold `1` (runs) or `0` (does not run).
fn day_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(other),
            &"0 or 1",
        )),
    }
}
