//! Caching wrapper around the Navitia client.
//!
//! Journey searches for a given (from, to, count, datetime) tuple are cached
//! for a short TTL so a dashboard refreshing every few seconds doesn't burn
//! through the SNCF API quota. Realtime delay data goes stale quickly, so
//! the TTL stays short. Train-number searches fan out across many station
//! pairs and are not cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::domain::StationId;
use crate::navitia::{NavitiaClient, NavitiaError, RawJourney};

/// Configuration for the journey cache.
#[derive(Debug, Clone)]
pub struct JourneyCacheConfig {
    /// How long a cached journey response stays valid.
    pub ttl: Duration,

    /// Maximum number of cached (from, to, count, datetime) entries.
    pub max_capacity: u64,
}

impl Default for JourneyCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

type JourneyKey = (StationId, StationId, u32, Option<String>);

/// A [`NavitiaClient`] with a TTL cache in front of journey searches.
pub struct CachedNavitiaClient {
    client: NavitiaClient,
    cache: Cache<JourneyKey, Arc<Vec<RawJourney>>>,
}

impl CachedNavitiaClient {
    pub fn new(client: NavitiaClient, config: JourneyCacheConfig) -> Self {
        let cache = Cache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        Self { client, cache }
    }

    /// Fetch journeys, serving from cache when a fresh entry exists.
    ///
    /// Errors are not cached: a failed upstream call leaves no entry, so the
    /// next request retries.
    pub async fn journeys(
        &self,
        from: &StationId,
        to: &StationId,
        count: u32,
        datetime: Option<&str>,
    ) -> Result<Arc<Vec<RawJourney>>, NavitiaError> {
        let key = (
            from.clone(),
            to.clone(),
            count,
            datetime.map(str::to_owned),
        );

        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(%from, %to, "journey cache hit");
            return Ok(cached);
        }

        let journeys = self.client.journeys(from, to, count, datetime).await?;
        let journeys = Arc::new(journeys);
        self.cache.insert(key, Arc::clone(&journeys)).await;
        Ok(journeys)
    }

    /// Search for a train by number. Bypasses the cache: the fan-out hits
    /// many station pairs and each query window is effectively unique.
    pub async fn search_train_by_number(
        &self,
        number: &str,
        stations: &[StationId],
        datetime: Option<&str>,
    ) -> Result<Vec<RawJourney>, NavitiaError> {
        self.client
            .search_train_by_number(number, stations, datetime)
            .await
    }

    /// Access the underlying client, for calls that should never be cached.
    pub fn client(&self) -> &NavitiaClient {
        &self.client
    }

    /// Number of entries currently cached (approximate).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
