//! Shared application state.

use std::sync::Arc;

use crate::cache::CachedNavitiaClient;
use crate::stations::StationDirectory;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached Navitia client.
    pub navitia: Arc<CachedNavitiaClient>,

    /// Static station directory.
    pub stations: Arc<StationDirectory>,
}

impl AppState {
    pub fn new(navitia: CachedNavitiaClient, stations: StationDirectory) -> Self {
        Self {
            navitia: Arc::new(navitia),
            stations: Arc::new(stations),
        }
    }
}
