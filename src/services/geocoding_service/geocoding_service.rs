use async_trait::async_trait;
use tracing::{debug, instrument};
use urlencoding::encode;

use super::types::{
    geocoding_service_error::GeocodingServiceError,
    mapbox_geocoding_response::MapboxGeocodingResponse,
};
use crate::{types::coordinate::Coordinate, utils::json_fetcher::JsonFetcher};

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, place_name: &str) -> Result<Coordinate, GeocodingServiceError>;
}

#[derive(Clone, Debug)]
pub struct GeocodingServiceConfig {
    pub access_token: String,
    pub host: String,
}

/// Mapbox Places forward geocoding, restricted to points of interest.
#[derive(Clone)]
pub struct GeocodingService {
    config: GeocodingServiceConfig,
    fetcher: JsonFetcher,
}

impl GeocodingService {
    pub fn new(config: GeocodingServiceConfig, fetcher: JsonFetcher) -> Self {
        Self { config, fetcher }
    }
}

#[async_trait]
impl Geocoder for GeocodingService {
    #[instrument(skip(self))]
    async fn geocode(&self, place_name: &str) -> Result<Coordinate, GeocodingServiceError> {
        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}&types=poi",
            self.config.host,
            encode(place_name),
            self.config.access_token
        );

        let body = self
            .fetcher
            .get_json::<MapboxGeocodingResponse>(&url)
            .await
            .map_err(GeocodingServiceError::Fetch)?;

        let feature = body
            .features
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingServiceError::NoResults(place_name.to_string()))?;

        let [longitude, latitude] = feature.center;
        let coordinate = Coordinate::from_lon_lat(longitude, latitude);

        debug!(
            "Geocoded to {} ({}, {})",
            feature.place_name.as_deref().unwrap_or(place_name),
            coordinate.latitude,
            coordinate.longitude
        );

        Ok(coordinate)
    }
}
