//! Snapshot cache.
//!
//! Holds the most recently composed snapshot under a single key so that
//! scrapes inside the TTL window don't hit the upstream feed. Expiry is
//! checked when the slot is read; nothing sweeps it in the background.
//!
//! Concurrent scrapes that miss together share one composition. A failed
//! composition is never stored, so the next scrape retries from scratch.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, info};

use crate::domain::Snapshot;
use crate::stations::{RefreshError, StationComposer};

/// The only key the cache ever holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StationStatuses;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a composed snapshot is served before recomposing.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
        }
    }
}

/// Station composer with a single-slot TTL cache in front of it.
pub struct SnapshotCache {
    composer: StationComposer,
    slot: MokaCache<StationStatuses, Arc<Snapshot>>,
}

impl SnapshotCache {
    /// Create a new cache over the given composer.
    pub fn new(composer: StationComposer, config: &CacheConfig) -> Self {
        let slot = MokaCache::builder()
            .time_to_live(config.ttl)
            .build();

        Self { composer, slot }
    }

    /// Return the cached snapshot, composing a fresh one if the slot is
    /// empty or expired.
    pub async fn get(&self) -> Result<Arc<Snapshot>, Arc<RefreshError>> {
        let snapshot = self
            .slot
            .try_get_with(StationStatuses, async {
                info!("Snapshot cache miss, composing station statuses");
                self.composer.compose().await.map(Arc::new)
            })
            .await?;

        debug!(
            composed_at = %snapshot.composed_at,
            stations = snapshot.len(),
            "Serving snapshot"
        );
        Ok(snapshot)
    }

    /// Drop the cached snapshot, if any.
    pub async fn invalidate(&self) {
        self.slot.invalidate(&StationStatuses).await;
    }
}
