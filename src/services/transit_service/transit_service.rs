use async_trait::async_trait;
use tracing::{debug, instrument};

use super::types::{
    mbta_get_stops_response::MbtaGetStopsResponse, transit_service_error::TransitServiceError,
};
use crate::{
    types::{
        coordinate::Coordinate,
        stop::Stop,
        wheelchair_boarding::{UnrecognizedWheelchairBoarding, WheelchairBoarding},
    },
    utils::json_fetcher::JsonFetcher,
};

#[async_trait]
pub trait StopLocator: Send + Sync {
    async fn nearest_stop(&self, coordinate: &Coordinate) -> Result<Stop, TransitServiceError>;
}

#[derive(Clone, Debug)]
pub struct TransitServiceConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Clone)]
pub struct TransitService {
    config: TransitServiceConfig,
    fetcher: JsonFetcher,
}

impl TransitService {
    pub fn new(config: TransitServiceConfig, fetcher: JsonFetcher) -> Self {
        Self { config, fetcher }
    }
}

#[async_trait]
impl StopLocator for TransitService {
    #[instrument(skip(self))]
    async fn nearest_stop(&self, coordinate: &Coordinate) -> Result<Stop, TransitServiceError> {
        let url = format!(
            "{}/stops?filter[latitude]={}&filter[longitude]={}&sort=distance&api_key={}",
            self.config.host, coordinate.latitude, coordinate.longitude, self.config.api_key
        );

        let body = self
            .fetcher
            .get_json::<MbtaGetStopsResponse>(&url)
            .await
            .map_err(TransitServiceError::Fetch)?;

        // sort=distance puts the nearest stop first
        let nearest = body
            .data
            .into_iter()
            .next()
            .ok_or(TransitServiceError::NoStops)?;

        let wheelchair_boarding =
            WheelchairBoarding::try_from(nearest.attributes.wheelchair_boarding).map_err(
                |UnrecognizedWheelchairBoarding(code)| {
                    TransitServiceError::UnrecognizedWheelchairBoarding(code)
                },
            )?;

        debug!("Nearest stop is {} ({})", nearest.attributes.name, nearest.id);

        Ok(Stop {
            name: nearest.attributes.name,
            wheelchair_boarding,
        })
    }
}
