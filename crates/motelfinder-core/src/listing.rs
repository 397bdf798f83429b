use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Photo cap for listings on the free tier.
pub const MAX_PHOTOS_FREE: usize = 5;
/// Photo cap for premium listings.
pub const MAX_PHOTOS_PREMIUM: usize = 20;

/// A published motel listing.
///
/// Records are owned by the listings store; ranking and display code only
/// ever read them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    /// Opaque store identifier.
    pub id: String,
    pub name: String,
    pub description: String,
    pub city: String,
    /// Two-letter federative unit code, e.g. `"SP"`.
    pub state: String,
    pub address: String,
    pub zip_code: Option<String>,
    pub phone: String,
    pub whatsapp: String,
    pub website: Option<String>,
    /// Free-form text, e.g. `"24 horas"`.
    pub operating_hours: Option<String>,
    /// Stored option values; see [`crate::amenities`] for display labels.
    pub suite_periods: Vec<String>,
    pub services: Vec<String>,
    pub payment_methods: Vec<String>,
    pub social: SocialLinks,
    pub location: Option<GeoPoint>,
    pub is_premium: bool,
    pub views_count: u64,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub photos: Vec<Photo>,
}

/// A listing photo. `display_order` drives gallery order and need not be
/// contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub onlyfans: Option<String>,
    pub privacy_link: Option<String>,
}

impl SocialLinks {
    /// Provided links as `(network, url)` pairs in a fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("instagram", self.instagram.as_deref()),
            ("facebook", self.facebook.as_deref()),
            ("twitter", self.twitter.as_deref()),
            ("tiktok", self.tiktok.as_deref()),
            ("youtube", self.youtube.as_deref()),
            ("onlyfans", self.onlyfans.as_deref()),
            ("privacy", self.privacy_link.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, url)| url.map(|u| (network, u)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl Listing {
    #[must_use]
    pub fn coordinates(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Photos ordered by `display_order`; ties keep their stored order.
    #[must_use]
    pub fn sorted_photos(&self) -> Vec<&Photo> {
        let mut photos: Vec<&Photo> = self.photos.iter().collect();
        photos.sort_by_key(|p| p.display_order);
        photos
    }

    /// The photo shown on listing cards.
    #[must_use]
    pub fn cover_photo(&self) -> Option<&Photo> {
        self.photos.iter().min_by_key(|p| p.display_order)
    }

    /// `wa.me` deep link built from the digits of the whatsapp handle.
    ///
    /// Returns `None` when the handle contains no digits at all.
    #[must_use]
    pub fn whatsapp_link(&self, country_code: &str) -> Option<String> {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        Some(format!("https://wa.me/{country_code}{digits}"))
    }

    /// Google Maps directions to the listing, or an address search when it
    /// has no coordinates.
    #[must_use]
    pub fn maps_link(&self) -> String {
        match self.location {
            Some(p) => format!(
                "https://www.google.com/maps/dir/?api=1&destination={},{}",
                p.lat, p.lng
            ),
            None => format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                self.encoded_address()
            ),
        }
    }

    #[must_use]
    pub fn waze_link(&self) -> String {
        match self.location {
            Some(p) => format!("https://waze.com/ul?ll={},{}&navigate=yes", p.lat, p.lng),
            None => format!(
                "https://waze.com/ul?q={}&navigate=yes",
                self.encoded_address()
            ),
        }
    }

    fn encoded_address(&self) -> String {
        let query = format!("{}, {} - {}", self.address, self.city, self.state);
        utf8_percent_encode(&query, NON_ALPHANUMERIC).to_string()
    }

    /// Photo cap for this listing's tier.
    #[must_use]
    pub fn max_photos(&self) -> usize {
        if self.is_premium {
            MAX_PHOTOS_PREMIUM
        } else {
            MAX_PHOTOS_FREE
        }
    }

    #[must_use]
    pub fn exceeds_photo_quota(&self) -> bool {
        self.photos.len() > self.max_photos()
    }
}
