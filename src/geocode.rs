//! ArcGIS single-line geocoder client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::LookupError;
use crate::models::GeoPoint;

/// Extra fields requested alongside the match.
const OUT_FIELDS: &str = "Match_addr,Addr_type";

/// Client for a findAddressCandidates-style geocoding endpoint.
pub struct GeocoderClient {
    client: Client,
    endpoint: String,
}

/// Best-match candidate for a geocoded address.
#[derive(Debug, Clone)]
pub struct GeocodeHit {
    pub point: GeoPoint,
    /// Mailing city parsed out of the matched-address string, when present
    pub postal_city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    location: Location,
    #[serde(default)]
    address: String,
}

#[derive(Debug, Deserialize)]
struct Location {
    x: f64,
    y: f64,
}

impl GeocoderClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.to_string(),
        }
    }

    /// Geocode a single-line address, asking for at most one candidate.
    ///
    /// `Ok(None)` means the geocoder had no match for this address.
    pub async fn geocode(&self, address: &str) -> Result<Option<GeocodeHit>, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("f", "json"),
                ("singleLine", address),
                ("outFields", OUT_FIELDS),
                ("maxLocations", "1"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::request(&self.endpoint, e))?;

        if !response.status().is_success() {
            return Err(LookupError::status(&self.endpoint, response.status()));
        }

        let data: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| LookupError::request(&self.endpoint, e))?;

        let Some(candidate) = data.candidates.into_iter().next() else {
            debug!("no geocode candidate for {:?}", address);
            return Ok(None);
        };

        Ok(Some(GeocodeHit {
            point: GeoPoint {
                lat: candidate.location.y,
                lon: candidate.location.x,
            },
            postal_city: postal_city_from_match(&candidate.address),
        }))
    }
}

/// Derive the mailing city from the geocoder's matched-address string.
///
/// ArcGIS formats a US match as "STREET, CITY, STATE, ZIP", so the city is
/// the second comma-delimited segment. This is a heuristic on the formatted
/// string, not a dedicated response field; a match with fewer than two
/// segments (or a blank second segment) yields `None`.
fn postal_city_from_match(match_addr: &str) -> Option<String> {
    let city = match_addr.split(',').nth(1)?.trim();
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}
