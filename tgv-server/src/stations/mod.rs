//! Station directory.
//!
//! Maps human station names to Navitia stop-area IDs and country codes,
//! and carries the static adjacency list of stations reachable by direct
//! high-speed service. Persisted as a JSON file shipped with the server.

mod directory;
mod error;

pub use directory::{StationDirectory, StationRecord};
pub use error::StationError;
