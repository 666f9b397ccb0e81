//! Station name → stop-area lookup.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::StationId;

use super::error::StationError;

/// One configured station.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationRecord {
    /// Navitia stop-area ID.
    pub id: StationId,

    /// ISO country code (e.g., "FR", "GB").
    pub country: String,

    /// Names of stations reachable by direct high-speed service.
    #[serde(default)]
    pub connections: Vec<String>,
}

/// The set of stations the dashboard knows about.
///
/// Loaded once from a JSON file mapping station name to record; read-only
/// afterwards. The connection lists constrain which pairs the caller
/// queries — they are advisory for the UI, not enforced here.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: BTreeMap<String, StationRecord>,
}

impl StationDirectory {
    /// Load the directory from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse the directory from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let stations: BTreeMap<String, StationRecord> = serde_json::from_str(json)?;
        Ok(Self { stations })
    }

    /// Look up a station record by name.
    pub fn get(&self, name: &str) -> Option<&StationRecord> {
        self.stations.get(name)
    }

    /// Look up a station's stop-area ID by name.
    pub fn id_of(&self, name: &str) -> Option<&StationId> {
        self.stations.get(name).map(|r| &r.id)
    }

    /// Iterate over station names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    /// Station names in a given country, in sorted order.
    pub fn in_country(&self, country: &str) -> Vec<&str> {
        self.stations
            .iter()
            .filter(|(_, r)| r.country == country)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Connections reachable from a station, if it exists.
    pub fn connections_from(&self, name: &str) -> Option<&[String]> {
        self.stations.get(name).map(|r| r.connections.as_slice())
    }

    /// All stop-area IDs, in name order (for train-number searches).
    pub fn all_ids(&self) -> Vec<StationId> {
        self.stations.values().map(|r| r.id.clone()).collect()
    }

    /// Iterate over (name, record) pairs, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StationRecord)> {
        self.stations.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
