//! Domain types for the bikeshare exporter.
//!
//! These are the joined, feed-independent shapes the pipeline produces.
//! Wire DTOs live in [`crate::gbfs`]; everything here is rebuilt from
//! scratch on every composition.

mod station;
mod vehicle;

pub use station::{Snapshot, StationCatalogEntry, StationStatusRecord};
pub use vehicle::{VehicleCategory, VehicleTypeCatalog};
