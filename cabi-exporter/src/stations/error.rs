//! Station pipeline error types.

use crate::domain::VehicleCategory;
use crate::gbfs::FeedError;

/// The vehicle type catalog could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// No vehicle type matched the category's form factor and propulsion
    #[error("failed to load vehicle type for {0}")]
    MissingVehicleType(VehicleCategory),
}

/// Any failure that aborts a snapshot refresh.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}
