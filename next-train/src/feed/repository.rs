//! Read access to the loaded feed tables.

use super::records::{CalendarEntry, Route, Stop, StopTime, Trip};

/// Trait for providing the GTFS tables a query runs over.
///
/// Implementations hand out already-materialized tables; no accessor
/// performs I/O. This abstraction allows queries to be tested with
/// in-memory data.
pub trait FeedRepository {
    fn stops(&self) -> &[Stop];
    fn stop_times(&self) -> &[StopTime];
    fn trips(&self) -> &[Trip];
    fn calendar(&self) -> &[CalendarEntry];
    fn routes(&self) -> &[Route];
}

/// The five GTFS tables held in memory, in file order.
#[derive(Debug, Clone, Default)]
pub struct FeedTables {
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    pub calendar: Vec<CalendarEntry>,
}

impl FeedRepository for FeedTables {
    fn stops(&self) -> &[Stop] {
        &self.stops
    }

    fn stop_times(&self) -> &[StopTime] {
        &self.stop_times
    }

    fn trips(&self) -> &[Trip] {
        &self.trips
    }

    fn calendar(&self) -> &[CalendarEntry] {
        &self.calendar
    }

    fn routes(&self) -> &[Route] {
        &self.routes
    }
}
