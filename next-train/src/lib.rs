//! Next train departures from a static GTFS feed.
//!
//! Answers "when is the next train at this station?" by joining the
//! feed's stops, stop times, trips and calendar, and keeping the soonest
//! arrivals per destination for the rest of today.

pub mod config;
pub mod departures;
pub mod domain;
pub mod feed;
pub mod render;
