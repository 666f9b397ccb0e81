//! Journey formatting and delay analysis.
//!
//! Turns classified journeys into flat, display-ready rows: station and
//! train metadata from the first transit section, `HH:MM` times, a compact
//! duration, and per-endpoint delays reconciled from scheduled vs realtime
//! timestamps. Field extraction is best-effort; a journey missing data
//! still yields a row with placeholders rather than failing the batch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{RailDateTime, delay_minutes};
use crate::navitia::RawJourney;

/// Placeholder for fields that cannot be discovered.
const NA: &str = "N/A";

/// Delays of more than this many minutes mark a journey as delayed.
const DELAY_THRESHOLD_MINS: i64 = 5;

/// Sort key for formatted journeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Order rows by departure instant (the default).
    #[default]
    Departure,

    /// Order rows by arrival instant.
    Arrival,
}

/// Punctuality verdict for a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Neither endpoint is more than the threshold late.
    #[serde(rename = "On Time")]
    OnTime,

    /// Departure or arrival runs more than the threshold late.
    Delayed,
}

impl Status {
    /// Classify from the two endpoint delays.
    ///
    /// The boundary is strictly greater than the threshold: a 5-minute
    /// delay is still on time, 6 minutes is not.
    pub fn from_delays(departure_delay: i64, arrival_delay: i64) -> Self {
        if departure_delay > DELAY_THRESHOLD_MINS || arrival_delay > DELAY_THRESHOLD_MINS {
            Status::Delayed
        } else {
            Status::OnTime
        }
    }

    /// Whether this row should receive delay styling.
    pub fn is_delayed(&self) -> bool {
        matches!(self, Status::Delayed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::OnTime => f.write_str("On Time"),
            Status::Delayed => f.write_str("Delayed"),
        }
    }
}

/// A display-ready journey row.
///
/// `id` is the row's index in the classified (pre-sort) journey sequence
/// and is never reassigned, so a caller holding the classified list can
/// map any row back to its full journey after sorting.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyRow {
    /// Index into the classified journey sequence.
    pub id: usize,

    /// Operator brand, or `"N/A"`.
    pub provider: String,

    /// Train number, or `"N/A"`.
    pub train_number: String,

    /// Boarding stop name, or `"N/A"`.
    pub from_station: String,

    /// Alighting stop name, or `"N/A"`.
    pub to_station: String,

    /// Departure time of day, `HH:MM`, or `"N/A"`.
    pub departure: String,

    /// Arrival time of day, `HH:MM`, or `"N/A"`.
    pub arrival: String,

    /// Journey duration, `"{hours}h{minutes:02}"`.
    pub duration: String,

    /// Departure delay in minutes; positive is late, 0 without a baseline.
    pub departure_delay_minutes: i64,

    /// Arrival delay in minutes; positive is late, 0 without a baseline.
    pub arrival_delay_minutes: i64,

    /// Punctuality verdict.
    pub status: Status,
}

/// A row with its parsed instants still attached, before display rendering.
struct PreparedRow {
    id: usize,
    provider: String,
    train_number: String,
    from_station: String,
    to_station: String,
    departure: Option<RailDateTime>,
    arrival: Option<RailDateTime>,
    duration_secs: i64,
    departure_delay_minutes: i64,
    arrival_delay_minutes: i64,
}

impl PreparedRow {
    fn into_row(self) -> JourneyRow {
        let status = Status::from_delays(self.departure_delay_minutes, self.arrival_delay_minutes);

        JourneyRow {
            id: self.id,
            provider: self.provider,
            train_number: self.train_number,
            from_station: self.from_station,
            to_station: self.to_station,
            departure: display_time(self.departure),
            arrival: display_time(self.arrival),
            duration: format_duration(self.duration_secs),
            departure_delay_minutes: self.departure_delay_minutes,
            arrival_delay_minutes: self.arrival_delay_minutes,
            status,
        }
    }
}

/// Format classified journeys into sorted, display-ready rows.
///
/// Rows are sorted stably by the parsed departure or arrival instant;
/// journeys whose chosen instant cannot be parsed sort before all others.
/// Ties keep the classified order. Display strings are rendered after
/// sorting, from the parsed instants.
pub fn format_journeys(journeys: &[RawJourney], sort_by: SortBy) -> Vec<JourneyRow> {
    let mut prepared: Vec<PreparedRow> = journeys
        .iter()
        .enumerate()
        .map(|(id, j)| prepare(id, j))
        .collect();

    match sort_by {
        SortBy::Departure => prepared.sort_by_key(|p| p.departure),
        SortBy::Arrival => prepared.sort_by_key(|p| p.arrival),
    }

    prepared.into_iter().map(PreparedRow::into_row).collect()
}

fn prepare(id: usize, journey: &RawJourney) -> PreparedRow {
    let departure = parse_opt(journey.departure_date_time.as_deref());
    let arrival = parse_opt(journey.arrival_date_time.as_deref());

    let section = journey.first_public_transport();
    let info = section.and_then(|s| s.display_informations.as_ref());

    let provider = or_na(info.and_then(|d| d.commercial_mode.as_deref()));
    let train_number = or_na(info.and_then(|d| d.headsign.as_deref()));
    let from_station = or_na(section.and_then(|s| s.from_name()));
    let to_station = or_na(section.and_then(|s| s.to_name()));

    // Delays compare the section's scheduled baseline against the
    // journey-level realtime instants; either side missing means 0.
    let departure_delay_minutes = endpoint_delay(
        section.and_then(|s| s.base_departure_date_time.as_deref()),
        departure,
    );
    let arrival_delay_minutes = endpoint_delay(
        section.and_then(|s| s.base_arrival_date_time.as_deref()),
        arrival,
    );

    PreparedRow {
        id,
        provider,
        train_number,
        from_station,
        to_station,
        departure,
        arrival,
        duration_secs: journey.duration,
        departure_delay_minutes,
        arrival_delay_minutes,
    }
}

fn parse_opt(s: Option<&str>) -> Option<RailDateTime> {
    s.and_then(|s| RailDateTime::parse_compact(s).ok())
}

fn or_na(s: Option<&str>) -> String {
    s.unwrap_or(NA).to_string()
}

fn display_time(t: Option<RailDateTime>) -> String {
    t.map(|t| t.to_string()).unwrap_or_else(|| NA.to_string())
}

fn endpoint_delay(scheduled: Option<&str>, actual: Option<RailDateTime>) -> i64 {
    match (parse_opt(scheduled), actual) {
        (Some(scheduled), Some(actual)) => delay_minutes(scheduled, actual),
        _ => 0,
    }
}

/// Render a second count as `"{hours}h{minutes:02}"`.
fn format_duration(seconds: i64) -> String {
    let minutes = seconds / 60;
    format!("{}h{:02}", minutes / 60, minutes % 60)
}
