use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;
use crate::models::{RankingPolicyId, UserLocation};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub location: LocationSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

/// Where the event catalog comes from; the built-in sample when `path` is unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub path: Option<String>,
}

/// Location used until the user shares their own
#[derive(Debug, Clone, Deserialize)]
pub struct LocationSettings {
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lng")]
    pub lng: f64,
    #[serde(default = "default_location_name")]
    pub name: String,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lng: default_lng(),
            name: default_location_name(),
        }
    }
}

impl LocationSettings {
    pub fn to_user_location(&self) -> UserLocation {
        UserLocation::new(self.lat, self.lng, self.name.clone())
    }
}

fn default_lat() -> f64 { 19.0760 }
fn default_lng() -> f64 { 72.8777 }
fn default_location_name() -> String { "Mumbai, Maharashtra".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingSettings {
    #[serde(default)]
    pub default_policy: RankingPolicyId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with EVENTRANK)
    /// 5. `CATALOG_PATH`, if set
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EVENTRANK__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EVENTRANK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize::<Self>()?.checked()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("EVENTRANK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<Self>()?.checked()
    }

    /// Reject a default location the ranking engine could not use
    fn checked(self) -> Result<Self, ConfigError> {
        self.location
            .to_user_location()
            .validate()
            .map_err(|errors| ConfigError::Message(format!("invalid location: {}", errors)))?;
        Ok(self)
    }
}

/// Apply the unprefixed `CATALOG_PATH` variable used by deployment scripts
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("CATALOG_PATH") {
        Ok(path) if !path.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("catalog.path", path)?
            .build(),
        _ => Ok(settings),
    }
}
