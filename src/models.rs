//! Core data types for one address lookup.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Geographic point (lat/lon, WGS84)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Planar point in Web Mercator meters. Lives for the duration of one lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Attributes of one containing polygon, keyed by field name.
///
/// Values stay as raw JSON because layer attributes mix strings and numbers.
pub type BoundaryMatch = HashMap<String, Value>;

/// Final output of a successful lookup.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Mailing city from the geocoder's matched-address string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// Incorporated city name, or "Unincorporated"
    pub city: String,
}
