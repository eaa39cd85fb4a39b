//! Widget configuration, layered from an optional file and
//! `WINDOW_WEATHER_*` environment variables.

use crate::weather::{self, Units};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Weather API key. The only setting without a default.
    pub api_key: String,
    /// Location query (city name, optionally "City,CC").
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub units: Units,
    /// Current-weather endpoint; overridable so tests can point at a
    /// local server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds between weather fetches.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Directory holding the icon image assets.
    #[serde(default = "default_res_dir")]
    pub res_dir: String,
}

fn default_location() -> String {
    "London".to_string()
}

fn default_base_url() -> String {
    weather::DEFAULT_BASE_URL.to_string()
}

fn default_refresh_secs() -> u64 {
    60
}

fn default_res_dir() -> String {
    "res".to_string()
}

/// Load configuration. A `res/window-weather.toml` file is read when
/// present; environment variables override it.
pub fn load() -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::with_name("res/window-weather").required(false))
        .add_source(Environment::with_prefix("WINDOW_WEATHER"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_everything_but_the_key() {
        let config: AppConfig = Config::builder()
            .set_override("api_key", "test-key")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.location, "London");
        assert_eq!(config.units, Units::Metric);
        assert_eq!(config.base_url, weather::DEFAULT_BASE_URL);
        assert_eq!(config.refresh_secs, 60);
        assert_eq!(config.res_dir, "res");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result: Result<AppConfig, _> =
            Config::builder().build().unwrap().try_deserialize();
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("api_key", "k")
            .unwrap()
            .set_override("location", "Mumbai")
            .unwrap()
            .set_override("units", "imperial")
            .unwrap()
            .set_override("refresh_secs", 120)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.location, "Mumbai");
        assert_eq!(config.units, Units::Imperial);
        assert_eq!(config.refresh_secs, 120);
    }
}
