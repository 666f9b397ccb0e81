//! Direct high-speed journey classification.
//!
//! Decides which raw journeys qualify as direct high-speed travel,
//! optionally narrowed to a single operator brand. Qualification is
//! best-effort: malformed or incomplete journeys simply do not qualify,
//! they never raise.

use crate::domain::ProviderFilter;
use crate::navitia::RawJourney;

/// Physical-mode substrings that mark a high-speed service.
///
/// Matching on the vehicle class rather than the brand automatically
/// covers TGV, Eurostar, Trenitalia, Renfe, DB ICE, and whatever Navitia
/// adds next.
const HIGH_SPEED_MARKERS: [&str; 2] = ["grande vitesse", "high speed"];

/// Whether a physical mode string denotes a high-speed service.
///
/// The check is case-insensitive and substring-based.
pub fn is_high_speed(physical_mode: &str) -> bool {
    let mode = physical_mode.to_lowercase();
    HIGH_SPEED_MARKERS.iter().any(|m| mode.contains(m))
}

/// Filter journeys down to direct high-speed services.
///
/// A journey qualifies when it has no transfers, its first
/// `public_transport` section reports a high-speed physical mode, and
/// (when a filter is active) that section's commercial mode equals the
/// filter exactly. Only the first transit section is consulted; a journey
/// carrying several transit sections is assumed to be a continuation of
/// one physical train and is judged by its first leg.
///
/// The output preserves the input's relative order and never fails:
/// journeys with missing fields do not qualify.
pub fn classify_journeys(journeys: &[RawJourney], filter: &ProviderFilter) -> Vec<RawJourney> {
    journeys
        .iter()
        .filter(|j| qualifies(j, filter))
        .cloned()
        .collect()
}

fn qualifies(journey: &RawJourney, filter: &ProviderFilter) -> bool {
    if journey.nb_transfers != 0 {
        return false;
    }

    let Some(info) = journey
        .first_public_transport()
        .and_then(|s| s.display_informations.as_ref())
    else {
        return false;
    };

    if !info.physical_mode.as_deref().is_some_and(is_high_speed) {
        return false;
    }

    filter.matches(info.commercial_mode.as_deref())
}

/// Collect the distinct operator brands present in a journey list.
///
/// Looks at the first transit section of each journey, mirroring the
/// classifier. Returned sorted for stable presentation.
pub fn available_providers(journeys: &[RawJourney]) -> Vec<String> {
    let mut providers: Vec<String> = journeys
        .iter()
        .filter_map(|j| {
            j.first_public_transport()
                .and_then(|s| s.display_informations.as_ref())
                .and_then(|d| d.commercial_mode.clone())
        })
        .collect();

    providers.sort();
    providers.dedup();
    providers
}
