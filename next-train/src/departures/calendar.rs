//! Which services run on a given weekday.

use std::collections::HashSet;

use chrono::Weekday;

use crate::feed::CalendarEntry;

/// The set of service ids running on one weekday.
///
/// A service id with no calendar row is never active. If a service id
/// appears on several rows, it is active when any of them runs that day.
#[derive(Debug, Clone)]
pub struct ServiceCalendar<'a> {
    day: Weekday,
    active: HashSet<&'a str>,
}

impl<'a> ServiceCalendar<'a> {
    /// Build the active set for `day` from the calendar table.
    pub fn for_day(entries: &'a [CalendarEntry], day: Weekday) -> Self {
        let active = entries
            .iter()
            .filter(|entry| entry.runs_on(day))
            .map(|entry| entry.service_id.as_str())
            .collect();

        Self { day, active }
    }

    /// Whether `service_id` runs on this calendar's day.
    pub fn is_active(&self, service_id: &str) -> bool {
        self.active.contains(service_id)
    }

    /// The weekday this calendar was built for.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Number of services running that day.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// True if no service runs that day.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
