//! Search ranking: text/region filtering, distance annotation, and the
//! premium-first distance sort.
//!
//! Everything here is a pure function of its arguments. Listings are
//! borrowed, never mutated, and every call builds a fresh result.

use std::cmp::Ordering;

use serde::Serialize;

use crate::geo::{format_distance, haversine_km, GeoPoint};
use crate::listing::Listing;
use crate::region::RegionFilter;

/// Search form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Case-insensitive substring matched against name or city. `None` and
    /// `Some("")` both match everything.
    pub text: Option<String>,
    pub region: RegionFilter,
}

impl ListingFilter {
    #[must_use]
    pub fn new(text: Option<&str>, region: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            region: RegionFilter::from(region),
        }
    }

    fn needle(&self) -> Option<String> {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

/// A listing as it appears in search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedListing<'a> {
    #[serde(flatten)]
    pub listing: &'a Listing,
    /// Present only when both the observer and the listing have coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RankedListing<'_> {
    /// Display form of the distance, e.g. `"850m"` or `"12.3km"`.
    #[must_use]
    pub fn formatted_distance(&self) -> Option<String> {
        self.distance_km.map(format_distance)
    }
}

/// Filter, annotate and order `listings` for display.
///
/// Without an observer the filtered input order is returned untouched.
/// With one, premium listings come first; inside each tier listings are
/// ordered by ascending distance, and listings without coordinates follow
/// in their input order. The sort is stable.
#[must_use]
pub fn rank<'a>(
    listings: &'a [Listing],
    filter: &ListingFilter,
    observer: Option<GeoPoint>,
) -> Vec<RankedListing<'a>> {
    let needle = filter.needle();

    let mut ranked: Vec<RankedListing<'a>> = listings
        .iter()
        .filter(|listing| matches_text(listing, needle.as_deref()))
        .filter(|listing| filter.region.matches(&listing.state))
        .map(|listing| RankedListing {
            listing,
            distance_km: observer
                .zip(listing.location)
                .map(|(from, to)| haversine_km(to, from)),
        })
        .collect();

    if observer.is_some() {
        ranked.sort_by(rank_order);
    }

    tracing::debug!(
        total = listings.len(),
        matched = ranked.len(),
        sorted = observer.is_some(),
        region = %filter.region,
        "ranked listings"
    );

    ranked
}

fn matches_text(listing: &Listing, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    listing.name.to_lowercase().contains(needle) || listing.city.to_lowercase().contains(needle)
}

/// Premium tier first, then nearest first, then unscored listings.
fn rank_order(a: &RankedListing<'_>, b: &RankedListing<'_>) -> Ordering {
    b.listing
        .is_premium
        .cmp(&a.listing.is_premium)
        .then_with(|| match (a.distance_km, b.distance_km) {
            (Some(da), Some(db)) => da.total_cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Split ranked results into the featured premium section and the regular
/// section, keeping order within each.
#[must_use]
pub fn partition_premium<'a>(
    ranked: Vec<RankedListing<'a>>,
) -> (Vec<RankedListing<'a>>, Vec<RankedListing<'a>>) {
    ranked.into_iter().partition(|r| r.listing.is_premium)
}

/// Drop results farther than `radius_km`. Listings without a distance are kept.
#[must_use]
pub fn within_radius(mut ranked: Vec<RankedListing<'_>>, radius_km: f64) -> Vec<RankedListing<'_>> {
    ranked.retain(|r| r.distance_km.is_none_or(|d| d <= radius_km));
    ranked
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;
