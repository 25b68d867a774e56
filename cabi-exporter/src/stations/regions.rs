//! Region id → region name lookup.

use std::collections::HashMap;

use tracing::info;

use crate::gbfs::{FeedError, GbfsClient, RegionDto};

/// Region names keyed by region id.
pub type RegionMap = HashMap<String, String>;

/// Fetch the region list and index it by id.
pub async fn fetch_regions(client: &GbfsClient) -> Result<RegionMap, FeedError> {
    info!("Fetching regions");
    let data = client.fetch_regions().await?;
    Ok(build_region_map(data.regions))
}

/// Index regions by id. A repeated id keeps the name listed last.
pub fn build_region_map(regions: Vec<RegionDto>) -> RegionMap {
    regions
        .into_iter()
        .map(|r| (r.region_id, r.name))
        .collect()
}
