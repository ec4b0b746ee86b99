//! Lookup orchestration: geocode, reproject, containment queries, assembly.

use tracing::debug;

use crate::attrs::first_non_empty;
use crate::boundary::{BoundaryClient, BoundaryLayer};
use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::geocode::GeocoderClient;
use crate::mercator;
use crate::models::LookupResult;

/// County name field, with the fallback name used by older dataset versions.
const COUNTY_FIELDS: [&str; 2] = ["County", "POLYGON_NM"];
const CITY_FIELDS: [&str; 1] = ["NAME"];

/// Label for points outside every incorporated-city polygon.
pub const UNINCORPORATED: &str = "Unincorporated";

/// Resolves one address at a time to its county and incorporated city.
pub struct LookupService {
    geocoder: GeocoderClient,
    boundaries: BoundaryClient,
    county_layer: BoundaryLayer,
    city_layer: BoundaryLayer,
}

impl LookupService {
    pub fn new(config: &LookupConfig) -> Self {
        let timeout = config.timeout();
        Self {
            geocoder: GeocoderClient::new(&config.geocode_url, timeout),
            boundaries: BoundaryClient::new(timeout),
            county_layer: BoundaryLayer::new(&config.county_url, &COUNTY_FIELDS),
            city_layer: BoundaryLayer::new(&config.city_url, &CITY_FIELDS),
        }
    }

    /// Resolve an address to its coordinates, county, and incorporated city.
    ///
    /// `Ok(None)` means the geocoder had no match; no boundary queries are
    /// issued in that case. Land outside every city polygon gets the
    /// "Unincorporated" label, which is an expected outcome rather than an
    /// error. A transport failure on any remote call aborts the lookup.
    pub async fn resolve(&self, address: &str) -> Result<Option<LookupResult>, LookupError> {
        let Some(hit) = self.geocoder.geocode(address).await? else {
            return Ok(None);
        };

        let point = mercator::to_projected(hit.point.lat, hit.point.lon);
        debug!(
            "geocoded {:?} to ({}, {}), mercator ({}, {})",
            address, hit.point.lat, hit.point.lon, point.x, point.y
        );

        let county_attrs = self
            .boundaries
            .query_containing(point, &self.county_layer)
            .await?;
        let county = first_non_empty(county_attrs.as_ref(), &COUNTY_FIELDS);

        let city_attrs = self
            .boundaries
            .query_containing(point, &self.city_layer)
            .await?;
        let city = first_non_empty(city_attrs.as_ref(), &CITY_FIELDS)
            .unwrap_or_else(|| UNINCORPORATED.to_string());

        Ok(Some(LookupResult {
            address: address.to_string(),
            latitude: hit.point.lat,
            longitude: hit.point.lon,
            postal_city: hit.postal_city,
            county,
            city,
        }))
    }
}
