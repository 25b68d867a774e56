//! GBFS (General Bikeshare Feed Specification) client.
//!
//! The exporter reads four resources from a GBFS 2.3 feed: system regions,
//! station information, station status and vehicle types. Each is a JSON
//! document wrapped in the standard `{ "data": ... }` envelope.

mod client;
mod error;
pub mod mock;
mod types;

pub use client::{FeedResource, GbfsClient, GbfsConfig};
pub use error::FeedError;
pub use types::{
    GbfsResponse, RegionDto, RegionsData, StationInformationData, StationInformationDto,
    StationStatusData, StationStatusDto, VehicleTypeCountDto, VehicleTypeDto, VehicleTypesData,
};
