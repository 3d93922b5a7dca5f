//! Next-departure query over the feed tables.
//!
//! Given a station name and the current instant, finds the soonest
//! upcoming arrivals per destination (headsign), counting only services
//! that run on the current weekday. No overnight lookahead: a train is
//! upcoming only if it arrives later the same calendar day.

mod calendar;
mod query;

pub use calendar::ServiceCalendar;
pub use query::{Departure, DepartureBoard, QueryError, next_departures};
