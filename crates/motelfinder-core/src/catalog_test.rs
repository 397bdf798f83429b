use std::path::{Path, PathBuf};

use chrono::TimeZone;

use super::*;

fn record(id: &str, name: &str) -> ListingRecord {
    ListingRecord {
        id: id.to_string(),
        name: name.to_string(),
        is_active: true,
        ..ListingRecord::default()
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

#[test]
fn record_with_both_coordinates_is_located() {
    let mut r = record("1", "Blue Motel");
    r.latitude = Some(-23.55);
    r.longitude = Some(-46.63);
    let listing = Listing::from(r);
    assert_eq!(listing.location, Some(GeoPoint::new(-23.55, -46.63)));
}

#[test]
fn record_with_one_coordinate_is_unlocated() {
    let mut r = record("1", "Blue Motel");
    r.latitude = Some(-23.55);
    assert!(Listing::from(r).location.is_none());

    let mut r = record("2", "Red Suite");
    r.longitude = Some(-46.63);
    assert!(Listing::from(r).location.is_none());
}

#[test]
fn empty_links_become_none() {
    let mut r = record("1", "Blue Motel");
    r.website = Some(String::new());
    r.instagram = Some("  ".to_string());
    r.facebook = Some("https://facebook.com/blue".to_string());
    let listing = Listing::from(r);
    assert!(listing.website.is_none());
    assert!(listing.social.instagram.is_none());
    assert_eq!(
        listing.social.facebook.as_deref(),
        Some("https://facebook.com/blue")
    );
}

#[test]
fn detail_fields_are_normalized() {
    let mut r = record("1", "Blue Motel");
    r.zip_code = Some(String::new());
    r.operating_hours = Some("24 horas".to_string());
    r.services = Some(vec!["wifi".to_string(), " ".to_string(), "sauna".to_string()]);
    r.payment_methods = None;
    let listing = Listing::from(r);
    assert!(listing.zip_code.is_none());
    assert_eq!(listing.operating_hours.as_deref(), Some("24 horas"));
    assert_eq!(listing.services, ["wifi", "sauna"]);
    assert!(listing.payment_methods.is_empty());
    assert!(listing.suite_periods.is_empty());
}

#[test]
fn validate_rejects_empty_id() {
    let file = ListingsFile {
        listings: vec![record(" ", "Blue Motel")],
    };
    let err = validate_listings(&file).unwrap_err();
    assert!(err.to_string().contains("empty id"));
}

#[test]
fn validate_rejects_empty_name() {
    let file = ListingsFile {
        listings: vec![record("1", "")],
    };
    let err = validate_listings(&file).unwrap_err();
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn validate_allows_duplicate_ids() {
    let file = ListingsFile {
        listings: vec![record("1", "Blue Motel"), record("1", "Blue Motel")],
    };
    assert!(validate_listings(&file).is_ok());
}

#[test]
fn published_drops_inactive_and_orders_premium_then_views() {
    let mut listings: Vec<Listing> = vec![
        record("low", "Low"),
        record("high", "High"),
        record("prem", "Prem"),
        record("off", "Off"),
    ]
    .into_iter()
    .map(Listing::from)
    .collect();
    listings[0].views_count = 5;
    listings[1].views_count = 500;
    listings[2].is_premium = true;
    listings[3].is_active = false;
    listings[3].views_count = 10_000;

    let ids: Vec<String> = published(listings).into_iter().map(|l| l.id).collect();
    assert_eq!(ids, ["prem", "high", "low"]);
}

#[test]
fn owner_order_is_newest_first_with_undated_last() {
    let mut old = Listing::from(record("old", "Old"));
    old.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let mut new = Listing::from(record("new", "New"));
    new.created_at = Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    let undated = Listing::from(record("undated", "Undated"));

    let listings = vec![undated, old, new];
    let ids: Vec<&str> = owner_order(&listings)
        .into_iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, ["new", "old", "undated"]);
}

#[test]
fn catalog_stats_counts() {
    let mut a = Listing::from(record("a", "A"));
    a.is_premium = true;
    a.views_count = 10;
    let mut b = Listing::from(record("b", "B"));
    b.is_active = false;
    b.views_count = 5;
    let stats = CatalogStats::from_listings(&[a, b]);
    assert_eq!(
        stats,
        CatalogStats {
            total: 2,
            active: 1,
            premium: 1,
            total_views: 15,
        }
    );
}

#[test]
fn load_listings_from_json_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("listings.json");
    let listings = load_listings(&path).unwrap();
    assert_eq!(listings.len(), 3);
    assert!(listings[2].location.is_none());
    assert!(listings[2].website.is_none());
    assert!(listings.iter().all(|l| l.is_active));
}

#[test]
fn load_listings_from_real_file() {
    let path = workspace_root().join("config").join("listings.yaml");
    assert!(
        path.exists(),
        "listings.yaml missing at {path:?}; required for this test"
    );
    let result = load_listings(&path);
    assert!(result.is_ok(), "failed to load listings.yaml: {result:?}");
    let listings = result.unwrap();
    assert!(!listings.is_empty());
    assert!(listings.iter().any(|l| !l.is_active));
}

#[test]
fn load_listings_missing_file_is_io_error() {
    let path = workspace_root().join("config").join("does-not-exist.yaml");
    let err = load_listings(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ListingsFileIo { .. }));
}

#[test]
fn load_listings_rejects_unknown_extension() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let err = load_listings(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}
