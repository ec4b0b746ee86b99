//! Command-line lookup tool.
//!
//! Resolves one free-text address to its county and incorporated city
//! (or "Unincorporated") and prints the result.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use countyline::{LookupConfig, LookupService};

#[derive(Parser, Debug)]
#[command(name = "countyline")]
#[command(about = "California address to county / incorporated-city lookup")]
struct Args {
    /// Address to resolve (free text)
    address: String,

    /// TOML file with service endpoint configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Geocoding endpoint override
    #[arg(long)]
    geocode_url: Option<String>,

    /// County boundary layer override
    #[arg(long)]
    county_url: Option<String>,

    /// Incorporated-city boundary layer override
    #[arg(long)]
    city_url: Option<String>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LookupConfig::load_from_file(path)?,
        None => LookupConfig::default(),
    };
    if let Some(url) = args.geocode_url {
        config.geocode_url = url;
    }
    if let Some(url) = args.county_url {
        config.county_url = url;
    }
    if let Some(url) = args.city_url {
        config.city_url = url;
    }

    let service = LookupService::new(&config);

    let Some(result) = service.resolve(&args.address).await? else {
        eprintln!("Could not geocode that address. Please try again.");
        return Ok(ExitCode::FAILURE);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Address entered:     {}", result.address);
        println!(
            "Latitude/longitude:  {}, {}",
            result.latitude, result.longitude
        );
        println!(
            "Postal city:         {}",
            result.postal_city.as_deref().unwrap_or("(unknown)")
        );
        println!(
            "County:              {}",
            result.county.as_deref().unwrap_or("(unknown)")
        );
        println!("Incorporated city:   {}", result.city);
    }

    Ok(ExitCode::SUCCESS)
}
