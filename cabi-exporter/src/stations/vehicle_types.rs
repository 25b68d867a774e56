//! Vehicle type resolution.

use tracing::info;

use crate::domain::{VehicleCategory, VehicleTypeCatalog};
use crate::gbfs::{GbfsClient, VehicleTypeDto};

use super::error::{RefreshError, ResolutionError};

/// Fetch the vendor vehicle type list and resolve the category ids.
pub async fn fetch_vehicle_type_catalog(
    client: &GbfsClient,
) -> Result<VehicleTypeCatalog, RefreshError> {
    info!("Fetching vehicle types");
    let data = client.fetch_vehicle_types().await?;
    Ok(resolve_vehicle_types(&data.vehicle_types)?)
}

/// Pick the first vehicle type matching each category.
///
/// Fails if either category has no match; the classic bike is checked first.
pub fn resolve_vehicle_types(
    types: &[VehicleTypeDto],
) -> Result<VehicleTypeCatalog, ResolutionError> {
    let classic = find_id(types, VehicleCategory::Classic)?;
    let ebike = find_id(types, VehicleCategory::EBike)?;
    Ok(VehicleTypeCatalog::new(classic, ebike))
}

fn find_id(types: &[VehicleTypeDto], category: VehicleCategory) -> Result<&str, ResolutionError> {
    types
        .iter()
        .find(|t| {
            t.form_factor == category.form_factor()
                && t.propulsion_type == category.propulsion_type()
        })
        .map(|t| t.vehicle_type_id.as_str())
        .ok_or(ResolutionError::MissingVehicleType(category))
}
