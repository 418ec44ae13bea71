use async_trait::async_trait;
use tracing::{debug, instrument};
use urlencoding::encode;

use super::types::{
    openweathermap_current_response::OpenWeatherMapCurrentResponse,
    weather_service_error::WeatherServiceError,
};
use crate::{types::weather_report::WeatherReport, utils::json_fetcher::JsonFetcher};

#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Current conditions to show alongside `place_name`.
    async fn get_weather(&self, place_name: &str) -> Result<WeatherReport, WeatherServiceError>;
}

#[derive(Clone, Debug)]
pub struct WeatherServiceConfig {
    pub api_key: String,
    pub host: String,
    pub city: String,
    pub country_code: String,
}

/// OpenWeatherMap current conditions in imperial units.
///
/// Conditions are always reported for the configured city, whatever place the
/// user asked about.
#[derive(Clone)]
pub struct WeatherService {
    config: WeatherServiceConfig,
    fetcher: JsonFetcher,
}

impl WeatherService {
    pub fn new(config: WeatherServiceConfig, fetcher: JsonFetcher) -> Self {
        Self { config, fetcher }
    }
}

#[async_trait]
impl WeatherLookup for WeatherService {
    #[instrument(skip(self))]
    async fn get_weather(&self, place_name: &str) -> Result<WeatherReport, WeatherServiceError> {
        let url = format!(
            "{}/data/2.5/weather?q={},{}&APPID={}&units=imperial",
            self.config.host,
            encode(&self.config.city),
            encode(&self.config.country_code),
            self.config.api_key
        );

        let body = self
            .fetcher
            .get_json::<OpenWeatherMapCurrentResponse>(&url)
            .await
            .map_err(WeatherServiceError::Fetch)?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherServiceError::NoConditions)?;

        debug!(
            "{}: {}°F, {}",
            self.config.city, body.main.temp, condition.description
        );

        Ok(WeatherReport {
            temperature: body.main.temp,
            description: condition.description,
        })
    }
}
