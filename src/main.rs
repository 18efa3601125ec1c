//! Command line tool for inspecting geographic download domains.
//!
//! # Usage
//!
//! ```bash
//! # Print query parameters for a bounding box
//! station-domains params rectangular --min-latitude=-10 --max-latitude=10 \
//!     --min-longitude=-20 --max-longitude=20
//!
//! # Print query parameters for an annulus
//! station-domains params circular --latitude 0 --longitude 0 --min-radius 0 --max-radius 90
//!
//! # Ask whether a point lies inside a domain
//! station-domains contains --latitude 1 --longitude 2 global
//!
//! # Post-filter stations from a JSON file
//! station-domains filter --stations stations.json global
//! ```
//!
//! # Environment Variables
//!
//! See [`station_domains::config`].

use station_domains::application::services::{PostFilter, StationSearch};
use station_domains::config::{self, Config};
use station_domains::domain::capabilities::GeographicDomain;
use station_domains::domain::entities::{Domain, Station};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Inspect geographic domains used to restrict station searches.
#[derive(Parser)]
#[command(name = "station-domains")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the query parameters of a domain
    Params {
        #[command(subcommand)]
        domain: DomainArgs,
    },

    /// Check whether a point lies inside a domain
    Contains {
        /// Point latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        /// Point longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        #[command(subcommand)]
        domain: DomainArgs,
    },

    /// Post-filter stations loaded from a JSON file
    Filter {
        /// JSON array of stations with network, station, latitude and longitude
        #[arg(short, long)]
        stations: PathBuf,

        #[command(subcommand)]
        domain: DomainArgs,
    },
}

/// Domain selection shared by every command.
#[derive(Subcommand)]
enum DomainArgs {
    /// Latitude/longitude bounding box
    Rectangular {
        #[arg(long, allow_negative_numbers = true)]
        min_latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        max_latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        min_longitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        max_longitude: f64,
    },

    /// Annulus around a center point, radii in degrees
    Circular {
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        min_radius: f64,
        #[arg(long, allow_negative_numbers = true)]
        max_radius: f64,
    },

    /// No geographic restriction
    Global,
}

impl From<DomainArgs> for Domain {
    fn from(args: DomainArgs) -> Self {
        match args {
            DomainArgs::Rectangular {
                min_latitude,
                max_latitude,
                min_longitude,
                max_longitude,
            } => Domain::rectangular(min_latitude, max_latitude, min_longitude, max_longitude),
            DomainArgs::Circular {
                latitude,
                longitude,
                min_radius,
                max_radius,
            } => Domain::circular(latitude, longitude, min_radius, max_radius),
            DomainArgs::Global => Domain::global(),
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config)?;
    config.print_summary();

    match cli.command {
        Commands::Params { domain } => print_params(&config, domain.into())?,
        Commands::Contains {
            latitude,
            longitude,
            domain,
        } => check_contains(&config, domain.into(), latitude, longitude)?,
        Commands::Filter { stations, domain } => filter_stations(&config, domain.into(), &stations)?,
    }

    Ok(())
}

/// Installs the global subscriber in text or JSON format.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directive '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Prints the query parameters of a domain.
fn print_params(config: &Config, domain: Domain) -> Result<()> {
    let params = domain.get_query_parameters();
    tracing::debug!(domain = domain.kind(), style = ?params.style(), "Derived query parameters");

    if config.is_json_output() {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    println!("{} {}", "Domain:".bright_white().bold(), domain.kind().cyan());

    if params.is_empty() {
        println!("  {}", "no geographic restriction".dimmed());
    }

    for (name, value) in params.iter() {
        println!("  {:<14} {}", name.bright_cyan(), value);
    }

    Ok(())
}

/// Reports whether a point lies inside a domain.
///
/// A domain without a membership test is reported as an error rather than
/// an answer.
fn check_contains(config: &Config, domain: Domain, latitude: f64, longitude: f64) -> Result<()> {
    let inside = domain
        .is_in_domain(latitude, longitude)
        .with_context(|| format!("Cannot test point ({latitude}, {longitude})"))?;

    if config.is_json_output() {
        println!(
            "{}",
            serde_json::json!({
                "domain": domain.kind(),
                "latitude": latitude,
                "longitude": longitude,
                "inside": inside,
            })
        );
    } else if inside {
        println!("{}", "inside".green().bold());
    } else {
        println!("{}", "outside".red().bold());
    }

    Ok(())
}

/// Loads stations from `path` and post-filters them against a domain.
fn filter_stations(config: &Config, domain: Domain, path: &Path) -> Result<()> {
    let stations = load_stations(path)?;
    tracing::info!(count = stations.len(), path = %path.display(), "Loaded stations");

    let search = StationSearch::new(domain);
    let result = search.post_filter(stations)?;

    if config.is_json_output() {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match &result {
        PostFilter::Applied(_) => println!("{}", "Post-filter applied".green().bold()),
        PostFilter::Unavailable(_) => println!(
            "{}",
            format!("Post-filter unavailable for {} domain", domain.kind()).yellow()
        ),
    }

    for station in result.stations() {
        println!(
            "  {:<12} {:>9.4} {:>10.4}",
            station.code().bright_cyan(),
            station.latitude,
            station.longitude
        );
    }

    Ok(())
}

fn load_stations(path: &Path) -> Result<Vec<Station>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
