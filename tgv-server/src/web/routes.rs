//! HTTP route handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::domain::{KNOWN_PROVIDERS, ProviderFilter, StationId};
use crate::journeys::{SortBy, available_providers, classify_journeys, format_journeys};
use crate::navitia::RawJourney;

use super::dto::{
    AppError, JourneySearchParams, JourneySearchResponse, ProvidersResponse, StationInfo,
    StationsResponse, Summary, TrainSearchParams,
};
use super::state::AppState;

/// Default and maximum journey counts requested upstream.
const DEFAULT_COUNT: u32 = 20;
const MAX_COUNT: u32 = 50;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/providers", get(list_providers))
        .route("/api/stations", get(list_stations))
        .route("/api/journeys", get(search_journeys))
        .route("/api/trains", get(search_train))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn list_providers() -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: KNOWN_PROVIDERS.iter().map(|p| p.to_string()).collect(),
    })
}

async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .stations
        .iter()
        .map(|(name, record)| StationInfo {
            name: name.to_string(),
            id: record.id.to_string(),
            country: record.country.clone(),
            connections: record.connections.clone(),
        })
        .collect();

    Json(StationsResponse { stations })
}

async fn search_journeys(
    State(state): State<AppState>,
    Query(params): Query<JourneySearchParams>,
) -> Result<Json<JourneySearchResponse>, AppError> {
    let from = resolve_station(&state, &params.from)?;
    let to = resolve_station(&state, &params.to)?;

    let count = params.count.unwrap_or(DEFAULT_COUNT).min(MAX_COUNT);
    let filter = ProviderFilter::from_param(params.provider.as_deref());
    let sort_by = params.sort_by.unwrap_or_default();

    let journeys = state
        .navitia
        .journeys(&from, &to, count, params.datetime.as_deref())
        .await?;

    let response = build_response(&journeys, &filter, sort_by);

    info!(
        from = %params.from,
        to = %params.to,
        total = response.total_journeys,
        matched = response.matched,
        "journey search"
    );

    Ok(Json(response))
}

async fn search_train(
    State(state): State<AppState>,
    Query(params): Query<TrainSearchParams>,
) -> Result<Json<JourneySearchResponse>, AppError> {
    let number = params.number.trim();
    if number.is_empty() {
        return Err(AppError::bad_request("train number must not be empty"));
    }

    let filter = ProviderFilter::from_param(params.provider.as_deref());
    let stations = state.stations.all_ids();

    // No caching here: the fan-out makes each search effectively unique.
    let journeys = state
        .navitia
        .search_train_by_number(number, &stations, params.datetime.as_deref())
        .await?;

    Ok(Json(build_response(&journeys, &filter, SortBy::default())))
}

fn resolve_station(state: &AppState, name: &str) -> Result<StationId, AppError> {
    state
        .stations
        .id_of(name)
        .cloned()
        .ok_or_else(|| AppError::bad_request(format!("unknown station: {name}")))
}

fn build_response(
    journeys: &[RawJourney],
    filter: &ProviderFilter,
    sort_by: SortBy,
) -> JourneySearchResponse {
    let classified = classify_journeys(journeys, filter);
    let rows = format_journeys(&classified, sort_by);
    let summary = Summary::from_rows(&rows);

    JourneySearchResponse {
        total_journeys: journeys.len(),
        matched: classified.len(),
        available_providers: available_providers(journeys),
        summary,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_journeys() -> Vec<RawJourney> {
        serde_json::from_str(
            r#"[
                {
                    "duration": 6780,
                    "nb_transfers": 0,
                    "departure_date_time": "20260829T141200",
                    "arrival_date_time": "20260829T160500",
                    "sections": [
                        {
                            "type": "public_transport",
                            "display_informations": {
                                "commercial_mode": "TGV INOUI",
                                "physical_mode": "Train grande vitesse",
                                "headsign": "6611"
                            },
                            "from": {"stop_point": {"name": "Paris Gare de Lyon"}},
                            "to": {"stop_point": {"name": "Lyon Part-Dieu"}},
                            "base_departure_date_time": "20260829T140500",
                            "base_arrival_date_time": "20260829T155800"
                        }
                    ]
                },
                {
                    "duration": 7200,
                    "nb_transfers": 1,
                    "sections": []
                },
                {
                    "duration": 7000,
                    "nb_transfers": 0,
                    "departure_date_time": "20260829T130000",
                    "arrival_date_time": "20260829T145640",
                    "sections": [
                        {
                            "type": "public_transport",
                            "display_informations": {
                                "commercial_mode": "OUIGO",
                                "physical_mode": "Train grande vitesse",
                                "headsign": "7821"
                            }
                        }
                    ]
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn response_counts_raw_and_matched() {
        let journeys = sample_journeys();
        let response = build_response(&journeys, &ProviderFilter::Any, SortBy::Departure);

        assert_eq!(response.total_journeys, 3);
        assert_eq!(response.matched, 2);
        assert_eq!(response.rows.len(), 2);
    }

    #[test]
    fn response_rows_are_sorted_by_departure() {
        let journeys = sample_journeys();
        let response = build_response(&journeys, &ProviderFilter::Any, SortBy::Departure);

        assert_eq!(response.rows[0].train_number, "7821");
        assert_eq!(response.rows[1].train_number, "6611");
    }

    #[test]
    fn response_respects_provider_filter() {
        let journeys = sample_journeys();
        let filter = ProviderFilter::Only("OUIGO".to_string());
        let response = build_response(&journeys, &filter, SortBy::Departure);

        assert_eq!(response.matched, 1);
        assert_eq!(response.rows[0].provider, "OUIGO");
        // Provider inventory still reflects everything seen upstream
        assert_eq!(
            response.available_providers,
            vec!["OUIGO".to_string(), "TGV INOUI".to_string()]
        );
    }

    #[test]
    fn response_summary_tracks_delays() {
        let journeys = sample_journeys();
        let response = build_response(&journeys, &ProviderFilter::Any, SortBy::Departure);

        // The TGV INOUI journey is 7 minutes late on both ends
        assert_eq!(response.summary.delayed, 1);
        assert_eq!(response.summary.on_time, 1);
        assert_eq!(response.summary.avg_arrival_delay_minutes, 3.5);
    }

    #[test]
    fn empty_upstream_yields_empty_response() {
        let response = build_response(&[], &ProviderFilter::Any, SortBy::Departure);

        assert_eq!(response.total_journeys, 0);
        assert_eq!(response.matched, 0);
        assert!(response.rows.is_empty());
        assert!(response.available_providers.is_empty());
        assert_eq!(response.summary.avg_arrival_delay_minutes, 0.0);
    }
}
