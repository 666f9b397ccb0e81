//! Journey classification and formatting.
//!
//! This is the decision core of the dashboard: it takes raw heterogeneous
//! journeys from the Navitia client and produces the clean, delay-annotated,
//! sorted result set the presentation layer renders. It performs no I/O and
//! holds no state; both passes are pure functions over in-memory slices,
//! safe to call concurrently.
//!
//! Callers run the two passes in sequence: [`classify_journeys`] first,
//! then [`format_journeys`] over the surviving subset. Row `id`s index the
//! classified sequence, so keeping that `Vec` around is what lets a UI map
//! a selected row back to the full journey after sorting.

mod classify;
mod format;

pub use classify::{available_providers, classify_journeys, is_high_speed};
pub use format::{JourneyRow, SortBy, Status, format_journeys};
