//! `search` and `show` handlers.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use motelfinder_core::amenities::{payment_method_label, service_label, suite_period_label};
use motelfinder_core::{
    is_known_state, load_listings, partition_premium, published, rank, within_radius, GeoPoint,
    Listing, ListingFilter, RankedListing, RegionFilter,
};

const NAME_WIDTH: usize = 32;
const CITY_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub(crate) struct SearchRequest {
    pub query: Option<String>,
    pub state: String,
    pub observer: Option<GeoPoint>,
    pub radius_km: Option<f64>,
    pub json: bool,
}

impl SearchRequest {
    fn filter(&self) -> ListingFilter {
        ListingFilter::new(self.query.as_deref(), Some(self.state.as_str()))
    }
}

/// Load the catalog, rank it for `request`, and print the results.
///
/// # Errors
///
/// Returns an error if the listings file cannot be loaded or the output
/// cannot be serialized.
pub(crate) fn run_search(listings_path: &Path, request: &SearchRequest) -> anyhow::Result<()> {
    let listings = published(
        load_listings(listings_path)
            .with_context(|| format!("loading listings from {}", listings_path.display()))?,
    );

    let filter = request.filter();
    if let RegionFilter::Code(code) = &filter.region {
        if !is_known_state(code) {
            tracing::warn!(state = %code, "unknown state code; no listing is likely to match");
        }
    }

    let mut ranked = rank(&listings, &filter, request.observer);
    if let (Some(radius), Some(_)) = (request.radius_km, request.observer) {
        ranked = within_radius(ranked, radius);
    }

    if request.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print!(
            "{}",
            render_results(ranked, request.observer.is_some(), &filter)
        );
    }

    Ok(())
}

/// Render search results as the two-section listing page: featured premium
/// listings first, then everything else.
pub(crate) fn render_results(
    ranked: Vec<RankedListing<'_>>,
    sorted_by_distance: bool,
    filter: &ListingFilter,
) -> String {
    let mut out = String::new();

    if ranked.is_empty() {
        let filtered = filter.text.as_deref().is_some_and(|t| !t.is_empty())
            || filter.region != RegionFilter::All;
        if filtered {
            out.push_str("no motels found; try adjusting the search filters\n");
        } else {
            out.push_str("no motels listed yet\n");
        }
        return out;
    }

    let (featured, regular) = partition_premium(ranked);

    if !featured.is_empty() {
        out.push_str("FEATURED PREMIUM\n");
        render_table(&mut out, &featured);
        out.push('\n');
    }

    if sorted_by_distance {
        out.push_str("NEAR YOU (sorted by distance)\n");
    } else {
        out.push_str("ALL MOTELS\n");
    }
    if regular.is_empty() {
        out.push_str("  (none)\n");
    } else {
        render_table(&mut out, &regular);
    }

    out
}

fn render_table(out: &mut String, rows: &[RankedListing<'_>]) {
    let _ = writeln!(
        out,
        "{:<34}{:<22}{:<4}{:>10}{:>8}",
        "NAME", "CITY", "UF", "DISTANCE", "VIEWS"
    );
    for row in rows {
        let distance = row
            .formatted_distance()
            .unwrap_or_else(|| "\u{2014}".to_string());
        let _ = writeln!(
            out,
            "{:<34}{:<22}{:<4}{:>10}{:>8}",
            truncate(&row.listing.name, NAME_WIDTH),
            truncate(&row.listing.city, CITY_WIDTH),
            row.listing.state,
            distance,
            row.listing.views_count
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max - 3).collect::<String>())
    } else {
        s.to_string()
    }
}

/// Print the detail view for one listing.
///
/// # Errors
///
/// Returns an error if the listings file cannot be loaded or no published
/// listing has the given id.
pub(crate) fn run_show(listings_path: &Path, id: &str, country_code: &str) -> anyhow::Result<()> {
    let listings = published(
        load_listings(listings_path)
            .with_context(|| format!("loading listings from {}", listings_path.display()))?,
    );
    let listing = listings
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| anyhow::anyhow!("motel '{id}' not found"))?;

    print!("{}", render_detail(listing, country_code));
    Ok(())
}

pub(crate) fn render_detail(listing: &Listing, country_code: &str) -> String {
    let mut out = String::new();

    let badge = if listing.is_premium { " [PREMIUM]" } else { "" };
    let _ = writeln!(out, "{}{badge}", listing.name);
    let _ = writeln!(out, "{}, {}", listing.city, listing.state);
    if !listing.address.is_empty() {
        match &listing.zip_code {
            Some(zip) => {
                let _ = writeln!(out, "Address: {} - CEP {zip}", listing.address);
            }
            None => {
                let _ = writeln!(out, "Address: {}", listing.address);
            }
        }
    }
    if let Some(hours) = &listing.operating_hours {
        let _ = writeln!(out, "Hours: {hours}");
    }
    if !listing.description.is_empty() {
        let _ = writeln!(out, "\n{}\n", listing.description);
    }
    let _ = writeln!(out, "Views: {}", listing.views_count);

    if !listing.phone.is_empty() {
        let _ = writeln!(out, "Phone: {}", listing.phone);
    }
    if let Some(link) = listing.whatsapp_link(country_code) {
        let _ = writeln!(out, "WhatsApp: {link}");
    }
    if let Some(website) = &listing.website {
        let _ = writeln!(out, "Website: {website}");
    }
    for (network, url) in listing.social.iter() {
        let _ = writeln!(out, "{network}: {url}");
    }
    if let Some(point) = listing.coordinates() {
        let _ = writeln!(out, "Location: {:.5}, {:.5}", point.lat, point.lng);
    }
    let _ = writeln!(out, "Google Maps: {}", listing.maps_link());
    let _ = writeln!(out, "Waze: {}", listing.waze_link());

    render_options(&mut out, "Suite periods", &listing.suite_periods, suite_period_label);
    render_options(&mut out, "Services", &listing.services, service_label);
    render_options(&mut out, "Payment methods", &listing.payment_methods, payment_method_label);

    let photos = listing.sorted_photos();
    if !photos.is_empty() {
        let _ = writeln!(out, "Photos ({}):", photos.len());
        for (idx, photo) in photos.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", idx + 1, photo.url);
        }
    }

    out
}

fn render_options(out: &mut String, heading: &str, values: &[String], label: fn(&str) -> &str) {
    if values.is_empty() {
        return;
    }
    let labels: Vec<&str> = values.iter().map(|v| label(v)).collect();
    let _ = writeln!(out, "{heading}: {}", labels.join(", "));
}
