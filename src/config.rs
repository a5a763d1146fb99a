//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::auth::GoTrueConfig;
use crate::i18n::Language;
use crate::location::{Coordinates, GeocoderConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub geocoding: GeocodingConfig,

    #[serde(default)]
    pub location: LocationConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_url")]
    pub url: String,

    #[serde(default)]
    pub anon_key: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_identity_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            url: default_identity_url(),
            anon_key: String::new(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl IdentityConfig {
    pub fn to_client_config(&self) -> GoTrueConfig {
        GoTrueConfig {
            url: self.url.clone(),
            anon_key: self.anon_key.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Reverse geocoding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_locality_language")]
    pub locality_language: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_geocoding_endpoint() -> String {
    "https://api.bigdatacloud.net/data/reverse-geocode-client".to_string()
}

fn default_locality_language() -> String {
    "en".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoding_endpoint(),
            locality_language: default_locality_language(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl GeocodingConfig {
    pub fn to_client_config(&self) -> GeocoderConfig {
        GeocoderConfig {
            endpoint: self.endpoint.clone(),
            locality_language: self.locality_language.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Fixed position reported by the terminal driver, which has no
/// platform geolocation service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationConfig {
    /// Both coordinates, when configured
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.latitude?, self.longitude?))
    }
}

/// Durable preference storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("nourish").to_string_lossy().to_string())
        .unwrap_or_else(|| "./nourish_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Static UI server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built UI bundle (the directory holding index.html)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> String {
    "nourish-ui/dist".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl WebConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Localization configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nConfig {
    /// Language used when nothing has been persisted yet
    #[serde(default)]
    pub default_language: Language,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Config file locations, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("nourish").join("config.toml")),
            Some(PathBuf::from("/etc/nourish/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply `NOURISH_*` overrides read through `var`
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Identity
        if let Some(url) = var("NOURISH_IDENTITY_URL") {
            self.identity.url = url;
        }
        if let Some(key) = var("NOURISH_IDENTITY_ANON_KEY") {
            self.identity.anon_key = key;
        }

        // Geocoding
        if let Some(endpoint) = var("NOURISH_GEOCODING_ENDPOINT") {
            self.geocoding.endpoint = endpoint;
        }

        // Location
        if let Some(lat) = var("NOURISH_LATITUDE").and_then(|v| v.parse().ok()) {
            self.location.latitude = Some(lat);
        }
        if let Some(lon) = var("NOURISH_LONGITUDE").and_then(|v| v.parse().ok()) {
            self.location.longitude = Some(lon);
        }

        // Storage
        if let Some(data_dir) = var("NOURISH_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        // Web
        if let Some(host) = var("NOURISH_WEB_HOST") {
            self.web.host = host;
        }
        if let Some(port) = var("NOURISH_WEB_PORT") {
            if let Ok(p) = port.parse() {
                self.web.port = p;
            }
        }
        if let Some(dist) = var("NOURISH_WEB_DIST") {
            self.web.dist_dir = dist;
        }

        // Localization
        if let Some(lang) = var("NOURISH_LANGUAGE").and_then(|v| Language::from_code(&v)) {
            self.i18n.default_language = lang;
        }

        // Logging
        if let Some(level) = var("NOURISH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("NOURISH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nourish Naturally Configuration
#
# Environment variables override these settings:
# - NOURISH_IDENTITY_URL
# - NOURISH_IDENTITY_ANON_KEY
# - NOURISH_GEOCODING_ENDPOINT
# - NOURISH_LATITUDE / NOURISH_LONGITUDE
# - NOURISH_DATA_DIR
# - NOURISH_WEB_HOST / NOURISH_WEB_PORT / NOURISH_WEB_DIST
# - NOURISH_LANGUAGE
# - NOURISH_LOG_LEVEL
# - NOURISH_LOG_FORMAT

[identity]
# Identity provider project URL
url = "http://localhost:54321"

# Public anon key sent with every request
anon_key = ""

# Request timeout in milliseconds
request_timeout_ms = 10000

[geocoding]
# Reverse geocoding endpoint
endpoint = "https://api.bigdatacloud.net/data/reverse-geocode-client"

# Language for place names
locality_language = "en"

# Request timeout in milliseconds
request_timeout_ms = 10000

[location]
# Fixed position for the terminal driver
# latitude = 19.076
# longitude = 72.8777

[storage]
# Directory for saved preferences and the session
data_dir = "~/.local/share/nourish"

[web]
# Static UI server host
host = "0.0.0.0"

# Static UI server port
port = 8080

# Built UI bundle
dist_dir = "nourish-ui/dist"

[i18n]
# Language used until one is chosen: en, hi, mr, gu, te, bn
default_language = "en"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.identity.url, "http://localhost:54321");
        assert_eq!(config.i18n.default_language, Language::En);
        assert!(config.location.coordinates().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[i18n]\ndefault_language = \"mr\"\n\n[location]\nlatitude = 18.52\nlongitude = 73.85\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.i18n.default_language, Language::Mr);
        assert_eq!(config.location.coordinates(), Some(Coordinates::new(18.52, 73.85)));
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.geocoding.locality_language, "en");
    }

    #[test]
    fn test_bad_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[web]\nport = \"eighty\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NOURISH_WEB_PORT", "9000"),
            ("NOURISH_LANGUAGE", "te"),
            ("NOURISH_LATITUDE", "17.38"),
            ("NOURISH_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.web.port, 9000);
        assert_eq!(config.i18n.default_language, Language::Te);
        assert_eq!(config.location.latitude, Some(17.38));
        assert!(config.location.coordinates().is_none());
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_unknown_language_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| (name == "NOURISH_LANGUAGE").then(|| "fr".to_string()));
        assert_eq!(config.i18n.default_language, Language::En);
    }

    #[test]
    fn test_client_configs() {
        let config = Config::default();
        assert_eq!(config.identity.to_client_config().request_timeout_ms, 10_000);
        assert_eq!(
            config.geocoding.to_client_config().endpoint,
            GeocoderConfig::default().endpoint
        );
    }
}
