//! Countyline - resolves a street address to its county and incorporated city
//!
//! One lookup geocodes the address, reprojects the hit to Web Mercator, runs
//! point-in-polygon queries against the county and incorporated-city boundary
//! layers, and reconciles attribute field names across dataset versions. The
//! shipped configuration targets California's statewide boundary services.

pub mod attrs;
pub mod boundary;
pub mod config;
pub mod error;
pub mod geocode;
pub mod lookup;
pub mod mercator;
pub mod models;

pub use config::LookupConfig;
pub use error::LookupError;
pub use lookup::{LookupService, UNINCORPORATED};
pub use models::{BoundaryMatch, GeoPoint, LookupResult, ProjectedPoint};
