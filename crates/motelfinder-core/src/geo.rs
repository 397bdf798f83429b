//! Coordinates and great-circle distance.

use serde::Serialize;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Both halves always travel together; a listing or observer either has a
/// full `GeoPoint` or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point only when both coordinates are present.
    #[must_use]
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Self { lat, lng }),
            _ => None,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    #[must_use]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        haversine_km(self, other)
    }
}

/// Haversine distance between two points on a sphere of radius 6371 km.
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Parse a search radius in kilometers. Only finite values above zero are
/// accepted; a NaN radius would otherwise hide every located listing.
///
/// # Errors
///
/// Returns a human-readable reason when `raw` is not a positive number.
pub fn parse_radius_km(raw: &str) -> Result<f64, String> {
    let km = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !km.is_finite() || km <= 0.0 {
        return Err(format!(
            "must be a positive number of kilometers, got {km}"
        ));
    }
    Ok(km)
}

/// Human-readable distance: whole meters under 1 km, one decimal above.
///
/// `0.85` renders as `"850m"`, `12.34` as `"12.3km"`.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0}m", km * 1000.0)
    } else {
        format!("{km:.1}km")
    }
}
