//! Domain types for the high-speed rail dashboard.
//!
//! This module contains the core domain model types that represent
//! validated rail data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod provider;
mod station_id;
mod time;

pub use provider::{KNOWN_PROVIDERS, ProviderFilter};
pub use station_id::{InvalidStationId, StationId};
pub use time::{RailDateTime, TimeError, delay_minutes};
