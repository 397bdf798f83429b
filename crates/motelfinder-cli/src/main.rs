mod dashboard;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "motelfinder-cli")]
#[command(about = "Search and inspect motel listings")]
struct Cli {
    /// Listings export to read (overrides `MOTELFINDER_LISTINGS_PATH`)
    #[arg(long, global = true)]
    listings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search published listings, nearest first when a location is given
    Search {
        /// Matches listing name or city, case-insensitive
        #[arg(long, short)]
        query: Option<String>,
        /// Two-letter state code, or "all"
        #[arg(long, default_value = "all")]
        state: String,
        /// Observer latitude in decimal degrees
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Observer longitude in decimal degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Hide results farther than this many kilometers
        #[arg(
            long,
            value_parser = motelfinder_core::parse_radius_km,
            allow_negative_numbers = true
        )]
        radius_km: Option<f64>,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single listing with photos and contact links
    Show {
        /// Listing id
        id: String,
    },
    /// List the state codes accepted by `search --state`
    States,
    /// Owner dashboard summary
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = motelfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    let listings_path = cli
        .listings
        .unwrap_or_else(|| config.listings_path.clone());

    match cli.command {
        Some(Commands::Search {
            query,
            state,
            lat,
            lng,
            radius_km,
            json,
        }) => {
            let request = search::SearchRequest {
                query,
                state,
                observer: motelfinder_core::GeoPoint::from_parts(lat, lng),
                radius_km: radius_km.or(config.search_radius_km),
                json,
            };
            search::run_search(&listings_path, &request)
        }
        Some(Commands::Show { id }) => {
            search::run_show(&listings_path, &id, &config.whatsapp_country_code)
        }
        Some(Commands::States) => {
            dashboard::run_states();
            Ok(())
        }
        Some(Commands::Stats) => dashboard::run_stats(&listings_path),
        None => {
            println!("motelfinder-cli: pass a subcommand, e.g. `search --query motel`");
            Ok(())
        }
    }
}
