//! Prometheus projection of station snapshots.
//!
//! Every station becomes one observation on each of a fixed set of gauges,
//! labelled with the station's name, region, id and coordinates. Each
//! projection resets all gauges first, so stations that drop out of the
//! feed stop being reported instead of keeping their last values.

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{Snapshot, StationStatusRecord};

/// Label names shared by every station gauge.
const STATION_LABELS: [&str; 5] = [
    "station_name",
    "station_region",
    "station_id",
    "station_latitude",
    "station_longitude",
];

/// A gauge and how to read its value off a record.
struct GaugeSpec {
    name: &'static str,
    help: &'static str,
    value: fn(&StationStatusRecord) -> f64,
}

static GAUGES: [GaugeSpec; 8] = [
    GaugeSpec {
        name: "cabi_station_capacity",
        help: "Number of docks at the station",
        value: |r| f64::from(r.capacity),
    },
    GaugeSpec {
        name: "cabi_docks_available",
        help: "Number of open docks at the station",
        value: |r| f64::from(r.docks_available),
    },
    GaugeSpec {
        name: "cabi_ebikes_available",
        help: "Number of ebikes available at the station",
        value: |r| f64::from(r.ebikes_available),
    },
    GaugeSpec {
        name: "cabi_classic_bikes_available",
        help: "Number of classic bikes available at the station",
        value: |r| f64::from(r.classic_bikes_available),
    },
    GaugeSpec {
        name: "cabi_disabled_bikes",
        help: "Number of disabled bikes at the station",
        value: |r| f64::from(r.bikes_disabled),
    },
    GaugeSpec {
        name: "cabi_disabled_docks",
        help: "Number of disabled docks at the station",
        value: |r| f64::from(r.docks_disabled),
    },
    GaugeSpec {
        name: "cabi_is_returning",
        help: "Whether the station is accepting bike returns",
        value: |r| f64::from(r.is_returning),
    },
    GaugeSpec {
        name: "cabi_is_renting",
        help: "Whether the station is renting bikes",
        value: |r| f64::from(r.is_renting),
    },
];

/// Errors registering or rendering the station gauges.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("rendered metrics are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Station gauges and the registry that renders them.
pub struct StationMetrics {
    registry: Registry,
    gauges: Vec<(&'static GaugeSpec, GaugeVec)>,
    /// Serializes project + render so a scrape never sees a half-replaced set.
    publish_lock: Mutex<()>,
}

impl StationMetrics {
    /// Create and register all station gauges in a private registry.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let gauges = GAUGES
            .iter()
            .map(|spec| {
                let gauge = GaugeVec::new(Opts::new(spec.name, spec.help), &STATION_LABELS)?;
                registry.register(Box::new(gauge.clone()))?;
                Ok::<_, MetricsError>((spec, gauge))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            registry,
            gauges,
            publish_lock: Mutex::new(()),
        })
    }

    /// Replace every gauge observation with the contents of `snapshot`.
    pub fn project(&self, snapshot: &Snapshot) {
        for (_, gauge) in &self.gauges {
            gauge.reset();
        }

        info!("Updating station metrics with {} stations", snapshot.len());
        for record in &snapshot.stations {
            let latitude = coordinate_label(record.latitude);
            let longitude = coordinate_label(record.longitude);
            let labels = [
                record.name.as_str(),
                record.region.as_str(),
                record.station_id.as_str(),
                latitude.as_str(),
                longitude.as_str(),
            ];

            for (spec, gauge) in &self.gauges {
                gauge.with_label_values(&labels[..]).set((spec.value)(record));
            }
        }
        info!("Updated station metrics");
    }

    /// Encode the registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Project `snapshot` and render the result as one step.
    pub async fn publish(&self, snapshot: &Snapshot) -> Result<String, MetricsError> {
        let _guard = self.publish_lock.lock().await;
        self.project(snapshot);
        self.render()
    }

    /// Content type of [`render`](Self::render) output.
    pub fn content_type(&self) -> &'static str {
        prometheus::TEXT_FORMAT
    }
}

/// Coordinates are labels, so a station without a catalog entry gets `""`.
fn coordinate_label(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
