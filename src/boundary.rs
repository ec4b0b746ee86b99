//! Spatial containment queries against ArcGIS polygon layers.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::error::LookupError;
use crate::models::{BoundaryMatch, ProjectedPoint};

/// A queryable polygon layer: endpoint plus the attribute fields to request.
#[derive(Debug, Clone)]
pub struct BoundaryLayer {
    pub endpoint: String,
    pub out_fields: Vec<String>,
}

impl BoundaryLayer {
    pub fn new(endpoint: &str, out_fields: &[&str]) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            out_fields: out_fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Client issuing point-intersects queries against polygon layers.
pub struct BoundaryClient {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    attributes: BoundaryMatch,
}

impl BoundaryClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Query a layer for the polygon containing `point` (Web Mercator).
    ///
    /// Geometry is suppressed in the response; only the requested attribute
    /// fields come back. Returns the first feature's attributes, or `None`
    /// when no polygon contains the point. Valid administrative layers do not
    /// overlap, so at most one feature is expected; extras are dropped. A
    /// body that does not parse counts as no match rather than a failure.
    pub async fn query_containing(
        &self,
        point: ProjectedPoint,
        layer: &BoundaryLayer,
    ) -> Result<Option<BoundaryMatch>, LookupError> {
        let geometry = format!("{},{}", point.x, point.y);
        let out_fields = layer.out_fields.join(",");

        let response = self
            .client
            .get(&layer.endpoint)
            .query(&[
                ("f", "json"),
                ("where", "1=1"),
                ("geometry", geometry.as_str()),
                ("geometryType", "esriGeometryPoint"),
                ("inSR", "102100"),
                ("spatialRel", "esriSpatialRelIntersects"),
                ("returnGeometry", "false"),
                ("outFields", out_fields.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LookupError::request(&layer.endpoint, e))?;

        if !response.status().is_success() {
            return Err(LookupError::status(&layer.endpoint, response.status()));
        }

        let data: QueryResponse = match response.json().await {
            Ok(d) => d,
            Err(e) => {
                warn!("unparseable response from {}: {}", layer.endpoint, e);
                return Ok(None);
            }
        };

        Ok(data.features.into_iter().next().map(|f| f.attributes))
    }
}
