//! Navitia API response DTOs.
//!
//! These types map directly to the Navitia `coverage/sncf` JSON responses.
//! They use `Option` liberally because Navitia omits fields rather than
//! sending null values in many cases — in particular, the `base_*` scheduled
//! times are absent whenever no realtime deviation is known.

use serde::Deserialize;

/// Response from `coverage/sncf/journeys`.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneysResponse {
    /// Matching journeys. Absent or empty means "no journeys", not an error.
    #[serde(default)]
    pub journeys: Vec<RawJourney>,
}

/// A single journey option between two stop areas.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJourney {
    /// Total journey duration in seconds.
    #[serde(default)]
    pub duration: i64,

    /// Realtime-adjusted departure, `YYYYMMDDTHHMMSS` local time.
    pub departure_date_time: Option<String>,

    /// Realtime-adjusted arrival, `YYYYMMDDTHHMMSS` local time.
    pub arrival_date_time: Option<String>,

    /// Number of transfers; 0 means a direct journey.
    #[serde(default)]
    pub nb_transfers: i64,

    /// Ordered legs of the journey (transit, waiting, walking, ...).
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl RawJourney {
    /// The first `public_transport` section, which carries the train metadata.
    ///
    /// Direct journeys are expected to have exactly one such section; later
    /// `public_transport` sections (same-platform continuations across
    /// networks) are deliberately not consulted.
    pub fn first_public_transport(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.is_public_transport())
    }
}

/// One leg of a journey.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Section kind; only `"public_transport"` sections carry train metadata.
    #[serde(rename = "type")]
    pub section_type: Option<String>,

    /// Operator, vehicle class, and headsign for transit sections.
    pub display_informations: Option<DisplayInformations>,

    /// Boarding location.
    pub from: Option<Place>,

    /// Alighting location.
    pub to: Option<Place>,

    /// Scheduled departure, present only when a realtime deviation is known.
    pub base_departure_date_time: Option<String>,

    /// Scheduled arrival, present only when a realtime deviation is known.
    pub base_arrival_date_time: Option<String>,

    /// Realtime-adjusted departure for this section.
    pub departure_date_time: Option<String>,

    /// Realtime-adjusted arrival for this section.
    pub arrival_date_time: Option<String>,
}

impl Section {
    /// Whether this is a `public_transport` section.
    pub fn is_public_transport(&self) -> bool {
        self.section_type.as_deref() == Some("public_transport")
    }

    /// The stop name at the boarding end, if present.
    pub fn from_name(&self) -> Option<&str> {
        self.from.as_ref().and_then(Place::stop_name)
    }

    /// The stop name at the alighting end, if present.
    pub fn to_name(&self) -> Option<&str> {
        self.to.as_ref().and_then(Place::stop_name)
    }
}

/// Display metadata for a transit section.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayInformations {
    /// Operator brand (e.g., "TGV INOUI", "Eurostar").
    pub commercial_mode: Option<String>,

    /// Vehicle class (e.g., "Train grande vitesse").
    pub physical_mode: Option<String>,

    /// Network name.
    pub network: Option<String>,

    /// Train number.
    pub headsign: Option<String>,

    /// Terminal destination shown on the train.
    pub direction: Option<String>,
}

/// A section endpoint, nesting the stop point.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    /// The stop point at this endpoint.
    pub stop_point: Option<StopPoint>,
}

impl Place {
    fn stop_name(&self) -> Option<&str> {
        self.stop_point.as_ref().and_then(|sp| sp.name.as_deref())
    }
}

/// A physical stop point.
#[derive(Debug, Clone, Deserialize)]
pub struct StopPoint {
    /// Human-readable stop name.
    pub name: Option<String>,
}

/// Response from `coverage/sncf/places`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    /// Matching places, best match first.
    #[serde(default)]
    pub places: Vec<PlaceResult>,
}

/// A place search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    /// Navitia ID (e.g., `stop_area:SNCF:87686006`).
    pub id: String,

    /// Human-readable name.
    pub name: Option<String>,
}
