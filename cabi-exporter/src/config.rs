//! Process configuration from the environment.

use std::net::SocketAddr;
use std::num::NonZeroU64;

use crate::cache::CacheConfig;
use crate::gbfs::GbfsConfig;

/// Port the exporter listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 9090;

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?} is not a valid {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Everything the exporter needs to start.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Listening port (`PORT`)
    pub port: u16,

    /// Upstream feed (`GBFS_BASE_URL`, `GBFS_TIMEOUT_SECS`)
    pub gbfs: GbfsConfig,

    pub cache: CacheConfig,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            gbfs: GbfsConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ExporterConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = parse("PORT", port, "port number")?;
        }

        if let Some(url) = lookup("GBFS_BASE_URL") {
            config.gbfs = config.gbfs.with_base_url(url);
        }

        if let Some(secs) = lookup("GBFS_TIMEOUT_SECS") {
            // A zero deadline fails every fetch before it starts.
            let secs: NonZeroU64 = parse("GBFS_TIMEOUT_SECS", secs, "positive number of seconds")?;
            config.gbfs = config.gbfs.with_timeout(secs.get());
        }

        Ok(config)
    }

    /// Address to bind: all interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            name,
            value,
            expected,
        })
}
