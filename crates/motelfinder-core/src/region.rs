//! Brazilian federative unit codes and the region search filter.

use std::convert::Infallible;
use std::str::FromStr;

/// The 26 states plus the Federal District, as shown in the search form.
pub const BRAZILIAN_STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Token the search form sends when no region is selected.
pub const ALL_REGIONS: &str = "all";

#[must_use]
pub fn is_known_state(code: &str) -> bool {
    BRAZILIAN_STATES.contains(&code)
}

/// Region restriction for a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionFilter {
    #[default]
    All,
    /// Exact, case-sensitive match against `Listing::state`.
    Code(String),
}

impl RegionFilter {
    #[must_use]
    pub fn matches(&self, state: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Code(code) => code == state,
        }
    }
}

impl FromStr for RegionFilter {
    type Err = Infallible;

    /// `"all"` in any case and the empty string both mean no restriction.
    /// Any other token is kept verbatim, so `" SP "` never matches `"SP"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_REGIONS) {
            Ok(RegionFilter::All)
        } else {
            Ok(RegionFilter::Code(s.to_string()))
        }
    }
}

impl From<Option<&str>> for RegionFilter {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => s.parse().unwrap_or_default(),
            None => RegionFilter::All,
        }
    }
}

impl std::fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionFilter::All => write!(f, "{ALL_REGIONS}"),
            RegionFilter::Code(code) => write!(f, "{code}"),
        }
    }
}
