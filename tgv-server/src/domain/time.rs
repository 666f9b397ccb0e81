//! Timestamp handling for the Navitia API.
//!
//! Navitia provides times as compact `YYYYMMDDTHHMMSS` strings in local time,
//! with no timezone tag. This module provides a date-aware wrapper for those
//! timestamps and the delay arithmetic shared by the journey formatter.

use chrono::{Duration, NaiveDateTime};
use std::cmp::Ordering;
use std::fmt;

/// Navitia's compact datetime format.
const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A full date-and-time instant parsed from Navitia's compact format.
///
/// Unlike a bare time of day, this carries the date, so overnight journeys
/// and cross-day sorting compare correctly.
///
/// # Examples
///
/// ```
/// use tgv_server::domain::RailDateTime;
///
/// let t = RailDateTime::parse_compact("20240101T080700").unwrap();
/// assert_eq!(t.to_string(), "08:07");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RailDateTime(NaiveDateTime);

impl RailDateTime {
    /// Create a RailDateTime from a chrono datetime.
    pub fn new(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// Parse a timestamp from `YYYYMMDDTHHMMSS` format.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgv_server::domain::RailDateTime;
    ///
    /// assert!(RailDateTime::parse_compact("20240315T143000").is_ok());
    ///
    /// // Wrong shape or out-of-range components are rejected
    /// assert!(RailDateTime::parse_compact("2024-03-15T14:30:00").is_err());
    /// assert!(RailDateTime::parse_compact("20240315T250000").is_err());
    /// assert!(RailDateTime::parse_compact("").is_err());
    /// ```
    pub fn parse_compact(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 15 characters: YYYYMMDDTHHMMSS
        if s.len() != 15 {
            return Err(TimeError::new("expected YYYYMMDDTHHMMSS format"));
        }

        let dt = NaiveDateTime::parse_from_str(s, COMPACT_FORMAT)
            .map_err(|_| TimeError::new("invalid date or time components"))?;

        Ok(Self(dt))
    }

    /// Returns the underlying chrono datetime.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the duration between two instants.
    ///
    /// Negative if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl Ord for RailDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for RailDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for RailDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RailDateTime({})", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

impl fmt::Display for RailDateTime {
    /// Displays only the time of day, `HH:MM`, as shown in result tables.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Delay in whole minutes between a scheduled and an actual instant.
///
/// Positive means running late. The second count is divided by 60 with
/// truncation toward zero, so a train running 90 seconds early reports
/// -1 minute rather than -2. This keeps parity with the dashboards this
/// server feeds, which have always rounded early arrivals optimistically.
pub fn delay_minutes(scheduled: RailDateTime, actual: RailDateTime) -> i64 {
    actual.signed_duration_since(scheduled).num_minutes()
}
