//! GBFS response DTOs.
//!
//! These map directly to the GBFS 2.3 JSON documents. Only the fields the
//! exporter uses are declared; everything else in the feed is ignored.
//! Live counts default to zero when the feed omits them.

use serde::{Deserialize, Deserializer};

/// The envelope every GBFS document is wrapped in.
#[derive(Debug, Clone, Deserialize)]
pub struct GbfsResponse<T> {
    pub data: T,
}

/// `system_regions.json` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsData {
    pub regions: Vec<RegionDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionDto {
    pub region_id: String,
    pub name: String,
}

/// `station_information.json` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationData {
    pub stations: Vec<StationInformationDto>,
}

/// Static description of one station.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationDto {
    pub station_id: String,

    /// Not every station belongs to a region.
    #[serde(default)]
    pub region_id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub capacity: u32,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,
}

/// `station_status.json` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusData {
    pub stations: Vec<StationStatusDto>,
}

/// Live status of one station.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusDto {
    pub station_id: String,

    #[serde(default, deserialize_with = "flag")]
    pub is_returning: u8,

    #[serde(default, deserialize_with = "flag")]
    pub is_renting: u8,

    #[serde(default)]
    pub num_docks_available: u32,

    #[serde(default)]
    pub num_docks_disabled: u32,

    #[serde(default)]
    pub num_bikes_disabled: u32,

    /// Available vehicles broken down by vehicle type id.
    #[serde(default)]
    pub vehicle_types_available: Vec<VehicleTypeCountDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTypeCountDto {
    pub vehicle_type_id: String,
    #[serde(default)]
    pub count: u32,
}

/// `vehicle_types.json` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTypesData {
    pub vehicle_types: Vec<VehicleTypeDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTypeDto {
    pub vehicle_type_id: String,
    pub form_factor: String,
    pub propulsion_type: String,
}

/// GBFS 2.x feeds disagree on whether status flags are `0`/`1` or
/// `false`/`true`. Accept either and normalise to `0`/`1`.
///
/// Integers pass through as-is for `0` and `1`. Any other non-zero integer
/// collapses to `1`, so the exported gauge is always a boolean.
fn flag<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => u8::from(b),
        Flag::Int(n) => u8::from(n != 0),
    })
}
