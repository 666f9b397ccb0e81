//! High-speed operator brands and the provider filter.

use std::fmt;

/// Operator brands (Navitia `commercial_mode` labels) known to run
/// high-speed services reachable from the configured stations.
///
/// The classifier does not restrict itself to this list; any operator
/// whose physical mode is high-speed qualifies. The list exists so the
/// presentation layer can offer a stable set of filter choices.
pub const KNOWN_PROVIDERS: [&str; 7] = [
    "TGV INOUI",
    "OUIGO",
    "TGV Lyria",
    "Eurostar",
    "DB SNCF",
    "Trenitalia",
    "Renfe",
];

/// Optional narrowing of results to a single operator brand.
///
/// Matching against `commercial_mode` is exact and case-sensitive:
/// operator labels are fixed brand strings, not free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderFilter {
    /// Accept every operator.
    Any,

    /// Accept only journeys operated under this exact brand label.
    Only(String),
}

impl ProviderFilter {
    /// Build a filter from a request parameter.
    ///
    /// `None`, the empty string, and the `"All"` sentinel used by the
    /// dashboard UI all mean "no filter".
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") | Some("All") => ProviderFilter::Any,
            Some(p) => ProviderFilter::Only(p.to_string()),
        }
    }

    /// Whether a section's commercial mode passes this filter.
    ///
    /// A missing commercial mode only passes when no filter is active.
    pub fn matches(&self, commercial_mode: Option<&str>) -> bool {
        match self {
            ProviderFilter::Any => true,
            ProviderFilter::Only(wanted) => commercial_mode == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for ProviderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderFilter::Any => f.write_str("All"),
            ProviderFilter::Only(p) => f.write_str(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_param_sentinels() {
        assert_eq!(ProviderFilter::from_param(None), ProviderFilter::Any);
        assert_eq!(ProviderFilter::from_param(Some("")), ProviderFilter::Any);
        assert_eq!(ProviderFilter::from_param(Some("All")), ProviderFilter::Any);
        assert_eq!(
            ProviderFilter::from_param(Some("OUIGO")),
            ProviderFilter::Only("OUIGO".to_string())
        );
    }

    #[test]
    fn any_matches_everything() {
        let filter = ProviderFilter::Any;
        assert!(filter.matches(Some("TGV INOUI")));
        assert!(filter.matches(Some("OUIGO")));
        assert!(filter.matches(None));
    }

    #[test]
    fn only_matches_exactly() {
        let filter = ProviderFilter::Only("TGV INOUI".to_string());
        assert!(filter.matches(Some("TGV INOUI")));
        assert!(!filter.matches(Some("OUIGO")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn only_is_case_sensitive() {
        let filter = ProviderFilter::Only("OUIGO".to_string());
        assert!(!filter.matches(Some("ouigo")));
        assert!(!filter.matches(Some("Ouigo")));
    }

    #[test]
    fn known_providers_are_distinct() {
        for (i, a) in KNOWN_PROVIDERS.iter().enumerate() {
            for b in &KNOWN_PROVIDERS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(ProviderFilter::Any.to_string(), "All");
        assert_eq!(
            ProviderFilter::Only("Eurostar".to_string()).to_string(),
            "Eurostar"
        );
    }
}
