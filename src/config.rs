use std::{env, time::Duration};

use crate::services::{
    geocoding_service::geocoding_service::GeocodingServiceConfig,
    transit_service::transit_service::TransitServiceConfig,
    weather_service::weather_service::WeatherServiceConfig,
};

const DEFAULT_MAPBOX_HOST: &str = "https://api.mapbox.com";
const DEFAULT_MBTA_HOST: &str = "https://api-v3.mbta.com";
const DEFAULT_WEATHER_HOST: &str = "https://api.openweathermap.org";
const DEFAULT_WEATHER_CITY: &str = "Boston";
const DEFAULT_WEATHER_COUNTRY: &str = "us";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "Missing environment variable {}", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub request_timeout: Duration,
    pub geocoding: GeocodingServiceConfig,
    pub transit: TransitServiceConfig,
    pub weather: WeatherServiceConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid {
                    key: "REQUEST_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
            request_timeout,
            geocoding: GeocodingServiceConfig {
                host: optional("MAPBOX_HOST", DEFAULT_MAPBOX_HOST),
                access_token: required("MAPBOX_TOKEN")?,
            },
            transit: TransitServiceConfig {
                host: optional("MBTA_HOST", DEFAULT_MBTA_HOST),
                api_key: required("MBTA_API_KEY")?,
            },
            weather: WeatherServiceConfig {
                host: optional("WEATHER_HOST", DEFAULT_WEATHER_HOST),
                api_key: required("WEATHER_API_KEY")?,
                city: optional("WEATHER_CITY", DEFAULT_WEATHER_CITY),
                country_code: optional("WEATHER_COUNTRY", DEFAULT_WEATHER_COUNTRY),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const KEYS: [(&str, &str); 3] = [
        ("MAPBOX_TOKEN", "mapbox"),
        ("MBTA_API_KEY", "mbta"),
        ("WEATHER_API_KEY", "weather"),
    ];

    #[test]
    fn applies_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&KEYS)).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.geocoding.host, "https://api.mapbox.com");
        assert_eq!(config.geocoding.access_token, "mapbox");
        assert_eq!(config.transit.host, "https://api-v3.mbta.com");
        assert_eq!(config.transit.api_key, "mbta");
        assert_eq!(config.weather.host, "https://api.openweathermap.org");
        assert_eq!(config.weather.city, "Boston");
        assert_eq!(config.weather.country_code, "us");
    }

    #[test]
    fn overrides_hosts() {
        let mut pairs = KEYS.to_vec();
        pairs.push(("MBTA_HOST", "http://localhost:1234"));
        pairs.push(("WEATHER_CITY", "Cambridge"));
        pairs.push(("REQUEST_TIMEOUT_SECS", "3"));

        let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(config.transit.host, "http://localhost:1234");
        assert_eq!(config.weather.city, "Cambridge");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn reports_missing_key() {
        let result = AppConfig::from_lookup(lookup_from(&KEYS[..2]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("WEATHER_API_KEY"));
    }

    #[test]
    fn treats_empty_key_as_missing() {
        let mut pairs = KEYS.to_vec();
        pairs[0] = ("MAPBOX_TOKEN", "");

        let result = AppConfig::from_lookup(lookup_from(&pairs));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("MAPBOX_TOKEN"));
    }

    #[test]
    fn rejects_bad_timeout() {
        let mut pairs = KEYS.to_vec();
        pairs.push(("REQUEST_TIMEOUT_SECS", "soon"));

        let result = AppConfig::from_lookup(lookup_from(&pairs));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
    }
}
