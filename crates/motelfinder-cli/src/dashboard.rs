//! Owner dashboard summary and the `states` helper.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use motelfinder_core::{load_listings, owner_order, CatalogStats, Listing, BRAZILIAN_STATES};

pub(crate) fn run_states() {
    println!("all");
    for code in BRAZILIAN_STATES {
        println!("{code}");
    }
}

/// Print catalog totals followed by every listing, newest first.
///
/// # Errors
///
/// Returns an error if the listings file cannot be loaded.
pub(crate) fn run_stats(listings_path: &Path) -> anyhow::Result<()> {
    let listings = load_listings(listings_path)
        .with_context(|| format!("loading listings from {}", listings_path.display()))?;

    print!("{}", render_stats(&listings));
    Ok(())
}

pub(crate) fn render_stats(listings: &[Listing]) -> String {
    let stats = CatalogStats::from_listings(listings);
    let mut out = String::new();

    let _ = writeln!(out, "Total motels:   {}", stats.total);
    let _ = writeln!(out, "Active:         {}", stats.active);
    let _ = writeln!(out, "Premium:        {}", stats.premium);
    let _ = writeln!(out, "Total views:    {}", stats.total_views);

    if listings.is_empty() {
        return out;
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "{:<12}{:<34}{:<10}{:<9}{:>8}",
        "CREATED", "NAME", "STATUS", "TIER", "VIEWS"
    );
    for listing in owner_order(listings) {
        let created = listing.created_at.map_or_else(
            || "\u{2014}".to_string(),
            |t| t.format("%Y-%m-%d").to_string(),
        );
        let status = if listing.is_active { "active" } else { "inactive" };
        let tier = if listing.is_premium { "premium" } else { "free" };
        let _ = writeln!(
            out,
            "{:<12}{:<34}{:<10}{:<9}{:>8}",
            created, listing.name, status, tier, listing.views_count
        );
    }

    out
}
