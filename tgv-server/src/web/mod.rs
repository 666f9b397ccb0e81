//! HTTP API layer.
//!
//! A small JSON API over the journey pipeline: station and provider
//! listings for populating pickers, journey search between two stations,
//! and train-number search across the whole directory.

mod dto;
mod routes;
mod state;

pub use dto::{
    AppError, JourneySearchParams, JourneySearchResponse, ProvidersResponse, StationInfo,
    StationsResponse, Summary, TrainSearchParams,
};
pub use routes::create_router;
pub use state::AppState;
