//! Listings catalog: loads store rows from a YAML or JSON export and turns
//! them into [`Listing`]s ready for ranking.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::listing::{Listing, Photo, SocialLinks};
use crate::ConfigError;

/// One row of the listings export, shaped like the store's `motels` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub zip_code: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: String,
    pub website: Option<String>,
    pub operating_hours: Option<String>,
    pub suite_periods: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
    pub payment_methods: Option<Vec<String>>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub onlyfans: Option<String>,
    pub privacy_link: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ListingsFile {
    pub listings: Vec<ListingRecord>,
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        let location = GeoPoint::from_parts(record.latitude, record.longitude);
        if location.is_none() && (record.latitude.is_some() || record.longitude.is_some()) {
            tracing::warn!(
                id = %record.id,
                "listing has only one coordinate; treating it as unlocated"
            );
        }

        Listing {
            id: record.id,
            name: record.name,
            description: record.description,
            city: record.city,
            state: record.state,
            address: record.address,
            zip_code: non_empty(record.zip_code),
            phone: record.phone,
            whatsapp: record.whatsapp,
            website: non_empty(record.website),
            operating_hours: non_empty(record.operating_hours),
            suite_periods: non_empty_values(record.suite_periods),
            services: non_empty_values(record.services),
            payment_methods: non_empty_values(record.payment_methods),
            social: SocialLinks {
                instagram: non_empty(record.instagram),
                facebook: non_empty(record.facebook),
                twitter: non_empty(record.twitter),
                tiktok: non_empty(record.tiktok),
                youtube: non_empty(record.youtube),
                onlyfans: non_empty(record.onlyfans),
                privacy_link: non_empty(record.privacy_link),
            },
            location,
            is_premium: record.is_premium,
            views_count: record.views_count,
            is_active: record.is_active,
            created_at: record.created_at,
            photos: record.photos,
        }
    }
}

/// The store keeps "not provided" as either NULL or `""`; both become `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Multi-select columns may be NULL or hold blank entries.
fn non_empty_values(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// Load and validate listings from a `.yaml`/`.yml` or `.json` file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ListingsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let file: ListingsFile = match extension.as_deref() {
        Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            })
        }
    };

    validate_listings(&file)?;

    let listings: Vec<Listing> = file.listings.into_iter().map(Listing::from).collect();
    for listing in listings.iter().filter(|l| l.exceeds_photo_quota()) {
        tracing::warn!(
            id = %listing.id,
            photos = listing.photos.len(),
            max = listing.max_photos(),
            "listing exceeds its photo quota"
        );
    }

    tracing::info!(path = %path.display(), count = listings.len(), "loaded listings");
    Ok(listings)
}

fn validate_listings(file: &ListingsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for (idx, record) in file.listings.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "listing #{} has an empty id",
                idx + 1
            )));
        }

        if record.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "listing '{}' has an empty name",
                record.id
            )));
        }

        if !seen_ids.insert(record.id.as_str()) {
            tracing::warn!(id = %record.id, "duplicate listing id");
        }
    }

    Ok(())
}

/// Active listings in the store's default order: premium first, then most
/// viewed. This is the order search results keep when no location is known.
#[must_use]
pub fn published(listings: Vec<Listing>) -> Vec<Listing> {
    let mut active: Vec<Listing> = listings.into_iter().filter(|l| l.is_active).collect();
    active.sort_by(|a, b| {
        b.is_premium
            .cmp(&a.is_premium)
            .then_with(|| b.views_count.cmp(&a.views_count))
    });
    active
}

/// Owner dashboard order: newest first, undated listings last.
#[must_use]
pub fn owner_order(listings: &[Listing]) -> Vec<&Listing> {
    let mut ordered: Vec<&Listing> = listings.iter().collect();
    ordered.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    ordered
}

/// Summary counters shown on the owner dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub premium: usize,
    pub total_views: u64,
}

impl CatalogStats {
    #[must_use]
    pub fn from_listings(listings: &[Listing]) -> Self {
        listings.iter().fold(Self::default(), |mut stats, l| {
            stats.total += 1;
            stats.active += usize::from(l.is_active);
            stats.premium += usize::from(l.is_premium);
            stats.total_views = stats.total_views.saturating_add(l.views_count);
            stats
        })
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
