//! Clock time handling for GTFS schedules.
//!
//! GTFS publishes stop times as "HH:MM:SS" strings relative to the service
//! day. Trips running past midnight use hours of 24 and above; this module
//! only accepts times within a single calendar day and rejects the rest.

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day taken from a GTFS stop time.
///
/// Values are always within 00:00:00..=23:59:59, so ordering two clock
/// times is ordering within one day.
///
/// # Examples
///
/// ```
/// use next_train::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmmss("08:05:00").unwrap();
/// assert_eq!(t.to_string(), "08:05:00");
///
/// // Post-midnight GTFS times are not representable
/// assert!(ClockTime::parse_hhmmss("25:30:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a clock time from hour, minute and second.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Parse a time from strict "HH:MM:SS" format.
    ///
    /// Exactly two digits per field, hour 00-23, minute and second 00-59.
    /// Single-digit hours ("8:05:00"), surrounding whitespace and leap
    /// seconds are all rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use next_train::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmmss("00:00:00").is_ok());
    /// assert!(ClockTime::parse_hhmmss("23:59:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmmss("8:05:00").is_err());
    /// assert!(ClockTime::parse_hhmmss("24:00:00").is_err());
    /// assert!(ClockTime::parse_hhmmss("12:60:00").is_err());
    /// ```
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Self::from_hms(hour, minute, second).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the underlying chrono time.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// True if this time is strictly later in the day than `now`.
    ///
    /// Sub-second precision in `now` counts: a train at 08:00:00 is not
    /// upcoming at 08:00:00.5.
    pub fn is_after(&self, now: NaiveTime) -> bool {
        self.0 > now
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(s: &str) -> ClockTime {
        ClockTime::parse_hhmmss(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let t = clock("00:00:00");
        assert_eq!((t.hour(), t.minute(), t.second()), (0, 0, 0));

        let t = clock("23:59:59");
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 59, 59));

        let t = clock("08:05:30");
        assert_eq!((t.hour(), t.minute(), t.second()), (8, 5, 30));
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ClockTime::parse_hhmmss("8:05:00").is_err());
        assert!(ClockTime::parse_hhmmss("08:05").is_err());
        assert!(ClockTime::parse_hhmmss("08:05:000").is_err());
        assert!(ClockTime::parse_hhmmss(" 08:05:00").is_err());
        assert!(ClockTime::parse_hhmmss("").is_err());

        // Wrong separators
        assert!(ClockTime::parse_hhmmss("08-05-00").is_err());
        assert!(ClockTime::parse_hhmmss("08:05.00").is_err());

        // Non-digit characters
        assert!(ClockTime::parse_hhmmss("ab:cd:ef").is_err());
        assert!(ClockTime::parse_hhmmss("0a:05:00").is_err());
        assert!(ClockTime::parse_hhmmss("+8:05:00").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        // GTFS overflow hours for post-midnight trips
        assert!(ClockTime::parse_hhmmss("24:00:00").is_err());
        assert!(ClockTime::parse_hhmmss("25:30:00").is_err());

        assert!(ClockTime::parse_hhmmss("12:60:00").is_err());
        assert!(ClockTime::parse_hhmmss("12:00:60").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(clock("00:00:00").to_string(), "00:00:00");
        assert_eq!(clock("09:05:07").to_string(), "09:05:07");
        assert_eq!(format!("{:?}", clock("23:59:59")), "ClockTime(23:59:59)");
    }

    #[test]
    fn ordering() {
        assert!(clock("08:00:00") < clock("08:00:01"));
        assert!(clock("08:05:00") > clock("08:00:59"));
        assert_eq!(clock("10:00:00"), clock("10:00:00"));
    }

    #[test]
    fn is_after_is_strict() {
        let t = clock("08:00:00");
        let at = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();

        assert!(t.is_after(at(7, 59, 59)));
        assert!(!t.is_after(at(8, 0, 0)));
        assert!(!t.is_after(at(9, 0, 0)));
        assert!(!t.is_after(NaiveTime::from_hms_milli_opt(8, 0, 0, 500).unwrap()));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&clock("08:05:00")).unwrap();
        assert_eq!(json, "\"08:05:00\"");
    }
}
