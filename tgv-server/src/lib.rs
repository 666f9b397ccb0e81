//! High-speed rail journey dashboard server.
//!
//! Fetches journey options from the Navitia SNCF API, keeps only direct
//! high-speed services, annotates them with realtime delays, and serves
//! the results over a small JSON API.
//!
//! The crate is layered:
//! - [`domain`]: validated timestamp, station ID, and provider types
//! - [`navitia`]: the upstream HTTP client and its wire types
//! - [`journeys`]: pure classification and formatting over raw journeys
//! - [`stations`]: the static station directory
//! - [`cache`]: short-TTL caching in front of journey searches
//! - [`web`]: axum routes and DTOs

pub mod cache;
pub mod domain;
pub mod journeys;
pub mod navitia;
pub mod stations;
pub mod web;
