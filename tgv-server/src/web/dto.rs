//! Request and response types for the HTTP API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::journeys::{JourneyRow, SortBy};
use crate::navitia::NavitiaError;

/// Query parameters for `GET /api/journeys`.
///
/// Derives `PartialEq` so callers polling on a timer can compare the
/// current parameters against the previous request and skip redundant
/// fetches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JourneySearchParams {
    /// Departure station name (as listed in the station directory).
    pub from: String,

    /// Arrival station name.
    pub to: String,

    /// Optional `YYYYMMDDTHHMMSS` floor for departures.
    pub datetime: Option<String>,

    /// Number of journeys to request upstream.
    pub count: Option<u32>,

    /// Provider filter; omitted, empty, or `"All"` means no filter.
    pub provider: Option<String>,

    /// Sort key, `departure` (default) or `arrival`.
    pub sort_by: Option<SortBy>,
}

/// Query parameters for `GET /api/trains`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainSearchParams {
    /// Train number (headsign substring, case-insensitive).
    pub number: String,

    /// Optional `YYYYMMDDTHHMMSS` floor for departures.
    pub datetime: Option<String>,

    /// Provider filter; omitted, empty, or `"All"` means no filter.
    pub provider: Option<String>,
}

/// Aggregate punctuality figures for a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of delayed rows.
    pub delayed: usize,

    /// Number of on-time rows.
    pub on_time: usize,

    /// Mean arrival delay across all rows, in minutes.
    pub avg_arrival_delay_minutes: f64,
}

impl Summary {
    /// Compute the summary for a set of rows. Empty input yields zeros.
    pub fn from_rows(rows: &[JourneyRow]) -> Self {
        let delayed = rows.iter().filter(|r| r.status.is_delayed()).count();
        let avg_arrival_delay_minutes = if rows.is_empty() {
            0.0
        } else {
            let total: i64 = rows.iter().map(|r| r.arrival_delay_minutes).sum();
            total as f64 / rows.len() as f64
        };

        Self {
            delayed,
            on_time: rows.len() - delayed,
            avg_arrival_delay_minutes,
        }
    }
}

/// Response body for `GET /api/journeys` and `GET /api/trains`.
#[derive(Debug, Serialize)]
pub struct JourneySearchResponse {
    /// Sorted, display-ready rows.
    pub rows: Vec<JourneyRow>,

    /// Journeys returned upstream, before classification.
    pub total_journeys: usize,

    /// Journeys surviving classification.
    pub matched: usize,

    /// Distinct commercial modes seen upstream, sorted.
    pub available_providers: Vec<String>,

    /// Punctuality aggregates over `rows`.
    pub summary: Summary,
}

/// One station in `GET /api/stations`.
#[derive(Debug, Serialize)]
pub struct StationInfo {
    pub name: String,
    pub id: String,
    pub country: String,
    pub connections: Vec<String>,
}

/// Response body for `GET /api/stations`.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationInfo>,
}

/// Response body for `GET /api/providers`.
#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<String>,
}

/// Error surface for API handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request itself is malformed (unknown station, bad parameter).
    #[error("{message}")]
    BadRequest { message: String },

    /// The Navitia upstream failed.
    #[error(transparent)]
    Upstream(#[from] NavitiaError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream(NavitiaError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journeys::Status;

    fn row(id: usize, arrival_delay: i64, status: Status) -> JourneyRow {
        JourneyRow {
            id,
            provider: "TGV INOUI".to_string(),
            train_number: "6611".to_string(),
            from_station: "Paris Gare de Lyon".to_string(),
            to_station: "Lyon Part-Dieu".to_string(),
            departure: "14:00".to_string(),
            arrival: "16:00".to_string(),
            duration: "2h00".to_string(),
            departure_delay_minutes: 0,
            arrival_delay_minutes: arrival_delay,
            status,
        }
    }

    #[test]
    fn summary_of_empty_is_zero() {
        let summary = Summary::from_rows(&[]);
        assert_eq!(summary.delayed, 0);
        assert_eq!(summary.on_time, 0);
        assert_eq!(summary.avg_arrival_delay_minutes, 0.0);
    }

    #[test]
    fn summary_counts_and_averages() {
        let rows = vec![
            row(0, 10, Status::Delayed),
            row(1, 0, Status::OnTime),
            row(2, 2, Status::OnTime),
        ];

        let summary = Summary::from_rows(&rows);
        assert_eq!(summary.delayed, 1);
        assert_eq!(summary.on_time, 2);
        assert_eq!(summary.avg_arrival_delay_minutes, 4.0);
    }

    #[test]
    fn summary_average_includes_negative_delays() {
        let rows = vec![row(0, -2, Status::OnTime), row(1, 6, Status::Delayed)];

        let summary = Summary::from_rows(&rows);
        assert_eq!(summary.avg_arrival_delay_minutes, 2.0);
    }

    #[test]
    fn journey_params_deserialization() {
        let params: JourneySearchParams = serde_json::from_str(
            r#"{
                "from": "Paris Gare de Lyon",
                "to": "Lyon Part-Dieu",
                "count": 10,
                "provider": "OUIGO",
                "sort_by": "arrival"
            }"#,
        )
        .unwrap();

        assert_eq!(params.from, "Paris Gare de Lyon");
        assert_eq!(params.count, Some(10));
        assert_eq!(params.sort_by, Some(SortBy::Arrival));
        assert!(params.datetime.is_none());
    }

    #[test]
    fn journey_params_equality_detects_changes() {
        let base: JourneySearchParams = serde_json::from_str(
            r#"{"from": "Paris Gare de Lyon", "to": "Lyon Part-Dieu"}"#,
        )
        .unwrap();

        let same = base.clone();
        assert_eq!(base, same);

        let mut different = base.clone();
        different.provider = Some("OUIGO".to_string());
        assert_ne!(base, different);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::bad_request("unknown station").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rate_limited_maps_to_429() {
        let response = AppError::Upstream(NavitiaError::RateLimited).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn other_upstream_errors_map_to_502() {
        let err = NavitiaError::ApiError {
            status: 500,
            message: "boom".to_string(),
        };
        let response = AppError::Upstream(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
