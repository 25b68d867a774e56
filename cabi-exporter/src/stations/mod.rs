//! Station pipeline: resolve regions and vehicle types, build the station
//! catalog, and compose it with live status.
//!
//! Each stage is split into a pure join function, testable without a feed,
//! and a thin async wrapper that performs the fetch.

mod catalog;
mod error;
mod regions;
mod status;
mod vehicle_types;

pub use catalog::{StationCatalog, build_catalog, fetch_station_catalog};
pub use error::{RefreshError, ResolutionError};
pub use regions::{RegionMap, build_region_map, fetch_regions};
pub use status::{StationComposer, compose_records};
pub use vehicle_types::{fetch_vehicle_type_catalog, resolve_vehicle_types};
