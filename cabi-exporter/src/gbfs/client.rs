//! GBFS HTTP client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::FeedError;
use super::types::{
    GbfsResponse, RegionsData, StationInformationData, StationStatusData, VehicleTypesData,
};

/// Default base URL: Capital Bikeshare's GBFS 2.3 English feed.
const DEFAULT_BASE_URL: &str = "https://gbfs.lyft.com/gbfs/2.3/dca-cabi/en";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The feed documents the exporter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedResource {
    Regions,
    StationInformation,
    StationStatus,
    VehicleTypes,
}

impl FeedResource {
    pub const ALL: [FeedResource; 4] = [
        FeedResource::Regions,
        FeedResource::StationInformation,
        FeedResource::StationStatus,
        FeedResource::VehicleTypes,
    ];

    /// File name of the document under the feed base URL.
    pub fn file_name(self) -> &'static str {
        match self {
            FeedResource::Regions => "system_regions.json",
            FeedResource::StationInformation => "station_information.json",
            FeedResource::StationStatus => "station_status.json",
            FeedResource::VehicleTypes => "vehicle_types.json",
        }
    }

    /// Inverse of [`FeedResource::file_name`].
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.file_name() == name)
    }
}

/// Configuration for the GBFS client.
#[derive(Debug, Clone)]
pub struct GbfsConfig {
    pub regions_url: String,
    pub station_information_url: String,
    pub station_status_url: String,
    pub vehicle_types_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GbfsConfig {
    fn default() -> Self {
        Self::for_base_url(DEFAULT_BASE_URL)
    }
}

impl GbfsConfig {
    fn for_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let url = |r: FeedResource| format!("{}/{}", base, r.file_name());

        Self {
            regions_url: url(FeedResource::Regions),
            station_information_url: url(FeedResource::StationInformation),
            station_status_url: url(FeedResource::StationStatus),
            vehicle_types_url: url(FeedResource::VehicleTypes),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Point every resource at a different feed base URL.
    pub fn with_base_url(self, url: impl AsRef<str>) -> Self {
        Self {
            timeout_secs: self.timeout_secs,
            ..Self::for_base_url(url.as_ref())
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// URL of a feed resource.
    pub fn url(&self, resource: FeedResource) -> &str {
        match resource {
            FeedResource::Regions => &self.regions_url,
            FeedResource::StationInformation => &self.station_information_url,
            FeedResource::StationStatus => &self.station_status_url,
            FeedResource::VehicleTypes => &self.vehicle_types_url,
        }
    }
}

/// Client for a GBFS feed.
///
/// Every fetch is a single round trip with no retry.
#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
    config: GbfsConfig,
}

impl GbfsClient {
    /// Create a new GBFS client with the given configuration.
    pub fn new(config: GbfsConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FeedError::Client)?;

        Ok(Self { http, config })
    }

    /// Fetch `system_regions.json`.
    pub async fn fetch_regions(&self) -> Result<RegionsData, FeedError> {
        self.fetch(FeedResource::Regions).await
    }

    /// Fetch `station_information.json`.
    pub async fn fetch_station_information(&self) -> Result<StationInformationData, FeedError> {
        self.fetch(FeedResource::StationInformation).await
    }

    /// Fetch `station_status.json`.
    pub async fn fetch_station_status(&self) -> Result<StationStatusData, FeedError> {
        self.fetch(FeedResource::StationStatus).await
    }

    /// Fetch `vehicle_types.json`.
    pub async fn fetch_vehicle_types(&self) -> Result<VehicleTypesData, FeedError> {
        self.fetch(FeedResource::VehicleTypes).await
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: FeedResource) -> Result<T, FeedError> {
        let url = self.config.url(resource);
        debug!(url, "GET");

        let http_error = |source| FeedError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(http_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await.map_err(http_error)?;

        let document: GbfsResponse<T> =
            serde_json::from_str(&body).map_err(|e| FeedError::Json {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(document.data)
    }
}
