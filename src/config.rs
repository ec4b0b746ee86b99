//! Service endpoint configuration.
//!
//! The defaults point at the official California statewide boundary datasets
//! and the ArcGIS World geocoder. Tests and other deployments substitute
//! their own endpoints through a TOML file or field overrides.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const CA_COUNTY_QUERY: &str =
    "https://services.gis.ca.gov/arcgis/rest/services/Boundaries/CA_Counties/FeatureServer/0/query";
const CA_CITY_QUERY: &str =
    "https://services.gis.ca.gov/arcgis/rest/services/Boundaries/Incorporated_Cities/MapServer/0/query";
const WORLD_GEOCODER: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Single-line geocoding endpoint
    pub geocode_url: String,
    /// County polygon layer query endpoint
    pub county_url: String,
    /// Incorporated-city polygon layer query endpoint
    pub city_url: String,
    /// Per-request timeout, shared by all three remote calls
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            geocode_url: WORLD_GEOCODER.to_string(),
            county_url: CA_COUNTY_QUERY.to_string(),
            city_url: CA_CITY_QUERY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LookupConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: LookupConfig =
            toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
