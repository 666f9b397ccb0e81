//! Navitia SNCF HTTP client.
//!
//! Provides async methods for querying the Navitia journey-planning API.
//! Handles authentication, rate limiting, and per-request concurrency caps.

use std::sync::Arc;

use futures::future::join_all;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::domain::StationId;

use super::error::NavitiaError;
use super::types::{JourneysResponse, PlacesResponse, RawJourney};

/// Default base URL for the Navitia API.
const DEFAULT_BASE_URL: &str = "https://api.navitia.io/v1";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Result count used per pair during train-number searches.
const TRAIN_SEARCH_COUNT: u32 = 50;

/// Configuration for the Navitia client.
#[derive(Debug, Clone)]
pub struct NavitiaConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production Navitia)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NavitiaConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 15,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Navitia SNCF API client.
///
/// Provides methods for querying journeys and stop areas. Uses a semaphore
/// to limit concurrent requests and avoid rate limiting, which matters for
/// the train-number search that fans out over station pairs.
#[derive(Debug, Clone)]
pub struct NavitiaClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl NavitiaClient {
    /// Create a new Navitia client with the given configuration.
    pub fn new(config: NavitiaConfig) -> Result<Self, NavitiaError> {
        let mut headers = HeaderMap::new();

        // Navitia takes the raw API key as the Authorization header value
        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| NavitiaError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert(AUTHORIZATION, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get journey options between two stop areas.
    ///
    /// Requests realtime data so that delayed journeys carry `base_*`
    /// scheduled times alongside the adjusted ones. An empty list means
    /// "no journeys", not an error.
    ///
    /// # Arguments
    ///
    /// * `from` - Departure stop-area ID
    /// * `to` - Arrival stop-area ID
    /// * `count` - Number of journeys to request
    /// * `datetime` - Optional `YYYYMMDDTHHMMSS` floor for departures
    pub async fn journeys(
        &self,
        from: &StationId,
        to: &StationId,
        count: u32,
        datetime: Option<&str>,
    ) -> Result<Vec<RawJourney>, NavitiaError> {
        let url = format!("{}/coverage/sncf/journeys", self.base_url);

        let mut query = vec![
            ("from", from.as_str().to_string()),
            ("to", to.as_str().to_string()),
            ("count", count.to_string()),
            ("data_freshness", "realtime".to_string()),
        ];
        if let Some(dt) = datetime {
            query.push(("datetime", dt.to_string()));
        }

        let response: JourneysResponse = self.get_json(&url, &query).await?;

        debug!(
            from = %from,
            to = %to,
            count = response.journeys.len(),
            "fetched journeys"
        );

        Ok(response.journeys)
    }

    /// Look up a stop-area ID by station name.
    ///
    /// Returns the best match, or `None` if the name is unknown to Navitia.
    pub async fn find_station(&self, name: &str) -> Result<Option<StationId>, NavitiaError> {
        let url = format!("{}/coverage/sncf/places", self.base_url);
        let query = vec![
            ("q", name.to_string()),
            ("type[]", "stop_area".to_string()),
        ];

        let response: PlacesResponse = self.get_json(&url, &query).await?;

        Ok(response
            .places
            .into_iter()
            .next()
            .and_then(|p| StationId::parse(&p.id).ok()))
    }

    /// Search for journeys served by a given train number.
    ///
    /// Navitia has no direct train-number endpoint, so this queries every
    /// ordered station pair from the pool and keeps journeys whose first
    /// transit section's headsign contains the number (case-insensitive).
    /// Pair queries run concurrently, bounded by the client semaphore;
    /// individual pair failures are skipped rather than failing the search.
    pub async fn search_train_by_number(
        &self,
        number: &str,
        stations: &[StationId],
        datetime: Option<&str>,
    ) -> Result<Vec<RawJourney>, NavitiaError> {
        info!(number, stations = stations.len(), "searching for train number");

        let needle = number.to_uppercase();

        let mut requests = Vec::new();
        for (i, from) in stations.iter().enumerate() {
            for to in &stations[i + 1..] {
                requests.push(self.journeys(from, to, TRAIN_SEARCH_COUNT, datetime));
            }
        }

        let mut matching = Vec::new();
        for result in join_all(requests).await {
            match result {
                Ok(journeys) => {
                    matching.extend(
                        journeys
                            .into_iter()
                            .filter(|j| headsign_contains(j, &needle)),
                    );
                }
                Err(e) => {
                    debug!(error = %e, "skipping station pair during train search");
                }
            }
        }

        info!(
            number,
            matches = matching.len(),
            "train number search complete"
        );

        Ok(matching)
    }

    /// Shared GET + status mapping + JSON decode for Navitia endpoints.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, NavitiaError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| NavitiaError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(NavitiaError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NavitiaError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NavitiaError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| NavitiaError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

/// Whether the journey's first transit section carries the wanted headsign.
///
/// `needle` must already be uppercased.
fn headsign_contains(journey: &RawJourney, needle: &str) -> bool {
    journey
        .first_public_transport()
        .and_then(|s| s.display_informations.as_ref())
        .and_then(|d| d.headsign.as_deref())
        .is_some_and(|h| h.to_uppercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = NavitiaConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = NavitiaConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn client_creation() {
        let config = NavitiaConfig::new("test-key");
        let client = NavitiaClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn headsign_matching() {
        let journey: RawJourney = serde_json::from_str(
            r#"{
                "sections": [
                    {"type": "public_transport",
                     "display_informations": {"headsign": "6611"}}
                ]
            }"#,
        )
        .unwrap();

        assert!(headsign_contains(&journey, "6611"));
        assert!(headsign_contains(&journey, "661"));
        assert!(!headsign_contains(&journey, "9999"));
    }

    #[test]
    fn headsign_matching_is_case_insensitive() {
        let journey: RawJourney = serde_json::from_str(
            r#"{
                "sections": [
                    {"type": "public_transport",
                     "display_informations": {"headsign": "tgv6611"}}
                ]
            }"#,
        )
        .unwrap();

        assert!(headsign_contains(&journey, "TGV6611"));
    }

    #[test]
    fn headsign_missing_never_matches() {
        let journey: RawJourney = serde_json::from_str("{}").unwrap();
        assert!(!headsign_contains(&journey, "6611"));
    }

    // Integration tests would go here, but require a real API key
    // and would make actual HTTP requests. They should be marked
    // with #[ignore] and run separately.
}
