//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::SnapshotCache;
use crate::metrics::StationMetrics;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached station pipeline
    pub snapshots: Arc<SnapshotCache>,

    /// Station gauges
    pub metrics: Arc<StationMetrics>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(snapshots: SnapshotCache, metrics: StationMetrics) -> Self {
        Self {
            snapshots: Arc::new(snapshots),
            metrics: Arc::new(metrics),
        }
    }
}
