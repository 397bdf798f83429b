//! Listing model, distance-ranked search, and catalog loading for motelfinder.

pub mod amenities;
pub mod app_config;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod listing;
pub mod ranking;
pub mod region;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_listings, owner_order, published, CatalogStats, ListingRecord};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use geo::{format_distance, haversine_km, parse_radius_km, GeoPoint};
pub use listing::{Listing, Photo, SocialLinks};
pub use ranking::{partition_premium, rank, within_radius, ListingFilter, RankedListing};
pub use region::{is_known_state, RegionFilter, BRAZILIAN_STATES};
