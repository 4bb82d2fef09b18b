//! Service configuration with TOML file support.

use geoclaim_gate::{RegistryError, TargetRegistry};
use geoclaim_types::{ClaimTarget, Coordinate, GeoError, Radius, TargetId};
use geoclaim_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("cannot parse config: {0}")]
    Parse(String),

    #[error("target {id}: {reason}")]
    InvalidTarget { id: String, reason: String },

    #[error("invalid default radius: {0}")]
    DefaultRadius(GeoError),

    #[error("mint_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Configuration for the claim service.
///
/// Loaded from a TOML file via [`ServiceConfig::from_toml_file`] or built
/// programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin browser clients.
    #[serde(default)]
    pub enable_cors: bool,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Radius applied to targets that do not set their own, in miles.
    #[serde(default = "default_radius_miles")]
    pub default_radius_miles: f64,

    /// URL of the mint service invoked for granted claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_endpoint: Option<String>,

    /// Timeout for a single mint request.
    #[serde(default = "default_mint_timeout_secs")]
    pub mint_timeout_secs: u64,

    /// Registered collectibles.
    #[serde(default)]
    pub targets: Vec<TargetEntry>,
}

/// One `[[targets]]` table.
///
/// At most one of `radius_km` / `radius_miles` may be given; with neither,
/// the service-wide default radius applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetEntry {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_miles: Option<f64>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A tenth of a mile (about 161 m).
fn default_radius_miles() -> f64 {
    0.1
}

fn default_mint_timeout_secs() -> u64 {
    10
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn default_radius(&self) -> Result<Radius, ConfigError> {
        Radius::from_miles(self.default_radius_miles).map_err(ConfigError::DefaultRadius)
    }

    /// Turn the `[[targets]]` tables into a validated registry.
    pub fn registry(&self) -> Result<TargetRegistry, ConfigError> {
        let default_radius = self.default_radius()?;
        let targets = self
            .targets
            .iter()
            .map(|entry| entry.to_target(default_radius))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TargetRegistry::new(targets)?)
    }

    /// Check everything that can be checked without touching the network.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mint_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.registry().map(|_| ())
    }
}

impl TargetEntry {
    fn to_target(&self, default_radius: Radius) -> Result<ClaimTarget, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidTarget {
            id: self.id.clone(),
            reason,
        };

        let position = Coordinate::new(self.lat, self.lng).map_err(|e| invalid(e.to_string()))?;
        let radius = match (self.radius_km, self.radius_miles) {
            (Some(_), Some(_)) => {
                return Err(invalid(
                    "set either radius_km or radius_miles, not both".to_string(),
                ))
            }
            (Some(km), None) => Radius::from_km(km),
            (None, Some(miles)) => Radius::from_miles(miles),
            (None, None) => Ok(default_radius),
        }
        .map_err(|e| invalid(e.to_string()))?;

        Ok(ClaimTarget::new(TargetId::new(self.id.as_str()), position, radius))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            enable_cors: false,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            default_radius_miles: default_radius_miles(),
            mint_endpoint: None,
            mint_timeout_secs: default_mint_timeout_secs(),
            targets: Vec::new(),
        }
    }
}
