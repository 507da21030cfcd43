//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: OpenWeatherMap credential and endpoints
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`
//! in the working directory, then `SKYCAST_*` environment variables
//! (`SKYCAST_SERVER__PORT=8080`). The API key may also come from
//! `OPENWEATHER_API_KEY`.

mod server;
mod weather;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

pub use server::{LogFormat, ServerConfig};
pub use weather::WeatherAppConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "SKYCAST";

/// Fallback environment variable for the provider key
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - permissive CORS
    #[default]
    Development,
    /// Production environment - CORS restricted to configured origins
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration using `file` as the optional file source
    ///
    /// `file` may omit its extension; the `config` crate probes the
    /// supported formats.
    pub fn load_from(file: &Path) -> Result<Self, config::ConfigError> {
        let config = Self::build(file, None)?;
        Ok(config.with_api_key_fallback(std::env::var(API_KEY_ENV).ok()))
    }

    /// Layer defaults, `file` and `SKYCAST_*` variables
    ///
    /// `env` replaces the process environment when given.
    fn build(
        file: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(config::File::from(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }

    /// Fill the API key from `fallback` unless one is already configured
    #[must_use]
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        if !self.weather.is_configured() {
            if let Some(key) = fallback.filter(|key| !key.trim().is_empty()) {
                debug!("Using API key from {API_KEY_ENV}");
                self.weather.api_key = Some(key.into());
            }
        }
        self
    }

    /// Human-readable problems that do not prevent startup
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.weather.is_configured() {
            warnings.push(format!(
                "No weather API key configured; set {API_KEY_ENV} or weather.api_key"
            ));
        }

        if self.environment == Environment::Production && self.server.allowed_origins.is_empty() {
            warnings.push(
                "No CORS origins configured for production; browsers will be blocked".to_string(),
            );
        }

        warnings
    }

    /// Log every entry of [`Self::warnings`]
    pub fn log_warnings(&self) {
        for warning in self.warnings() {
            warn!(environment = %self.environment, "{warning}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn environment_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn environment_from_str() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 3000);
        assert!(!config.weather.is_configured());
    }

    #[test]
    fn app_config_deserialization() {
        let json = r#"{"environment":"production","server":{"port":8080},"weather":{"api_key":"abc"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.weather.api_key_str(), Some("abc"));
    }

    #[test]
    fn api_key_fallback_fills_missing_key() {
        let config = AppConfig::default().with_api_key_fallback(Some("from-env".to_string()));
        assert_eq!(config.weather.api_key_str(), Some("from-env"));
    }

    #[test]
    fn api_key_fallback_never_overrides() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some("from-file".to_string().into());
        let config = config.with_api_key_fallback(Some("from-env".to_string()));
        assert_eq!(config.weather.api_key_str(), Some("from-file"));
    }

    #[test]
    fn api_key_fallback_ignores_blank() {
        let config = AppConfig::default().with_api_key_fallback(Some("  ".to_string()));
        assert!(!config.weather.is_configured());
    }

    #[test]
    fn warnings_flag_missing_key_and_open_cors() {
        let mut config = AppConfig::default();
        assert_eq!(config.warnings().len(), 1);

        config.environment = Environment::Production;
        assert_eq!(config.warnings().len(), 2);

        config.weather.api_key = Some("k".to_string().into());
        config.server.allowed_origins = vec!["https://skycast.example".to_string()];
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
environment = "production"

[server]
port = 4000
allowed_origins = ["https://skycast.example"]
log_format = "json"

[weather]
api_key = "file-key"
geo_limit = 3
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.weather.geo_limit, 3);
        assert_eq!(config.weather.api_key_str(), Some("file-key"));
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent")).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.weather.timeout_secs, 30);
    }

    fn env(vars: &[(&str, &str)]) -> config::Map<String, String> {
        vars.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn env_overrides_use_single_underscore_after_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let vars = env(&[
            ("SKYCAST_SERVER__PORT", "8080"),
            ("SKYCAST_WEATHER__GEO_LIMIT", "3"),
            ("SKYCAST_ENVIRONMENT", "production"),
        ]);

        let config = AppConfig::build(&dir.path().join("absent"), Some(vars)).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.weather.geo_limit, 3);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 4000").unwrap();

        let vars = env(&[("SKYCAST_SERVER__PORT", "5000")]);
        let config = AppConfig::build(file.path(), Some(vars)).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn double_underscore_after_prefix_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let vars = env(&[("SKYCAST__SERVER__PORT", "8080")]);

        let config = AppConfig::build(&dir.path().join("absent"), Some(vars)).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
