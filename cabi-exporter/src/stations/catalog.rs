//! Station catalog: static station attributes joined with region names.

use std::collections::HashMap;

use tracing::info;

use crate::domain::StationCatalogEntry;
use crate::gbfs::{FeedError, GbfsClient, StationInformationDto};

use super::regions::{RegionMap, fetch_regions};

/// Catalog entries keyed by station id.
pub type StationCatalog = HashMap<String, StationCatalogEntry>;

/// Resolve regions, then fetch station information and join the two.
pub async fn fetch_station_catalog(client: &GbfsClient) -> Result<StationCatalog, FeedError> {
    let regions = fetch_regions(client).await?;

    info!("Fetching station information");
    let data = client.fetch_station_information().await?;
    Ok(build_catalog(data.stations, &regions))
}

/// Build catalog entries, resolving each station's region name.
///
/// Unknown or missing region ids resolve to an empty name. A repeated
/// station id keeps the entry listed last.
pub fn build_catalog(stations: Vec<StationInformationDto>, regions: &RegionMap) -> StationCatalog {
    stations
        .into_iter()
        .map(|s| {
            let region = s
                .region_id
                .as_ref()
                .and_then(|id| regions.get(id))
                .cloned()
                .unwrap_or_default();

            let entry = StationCatalogEntry {
                station_id: s.station_id.clone(),
                name: s.name,
                region,
                capacity: s.capacity,
                latitude: s.lat,
                longitude: s.lon,
            };
            (s.station_id, entry)
        })
        .collect()
}
