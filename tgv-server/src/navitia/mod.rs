//! Navitia SNCF journey-planning client.
//!
//! This module provides an HTTP client for the Navitia `coverage/sncf` API,
//! which supplies journey options with realtime delay information.
//!
//! Key characteristics of Navitia:
//! - Times are compact `YYYYMMDDTHHMMSS` strings in local time
//! - `base_*` scheduled times appear **only** when a realtime deviation
//!   is known; their absence means "running as scheduled"
//! - An empty `journeys` list is a normal response, not an error
//! - There is no train-number endpoint; number searches fan out over
//!   station pairs

mod client;
mod error;
mod types;

pub use client::{NavitiaClient, NavitiaConfig};
pub use error::NavitiaError;
pub use types::{
    DisplayInformations, JourneysResponse, Place, PlaceResult, PlacesResponse, RawJourney, Section,
    StopPoint,
};
