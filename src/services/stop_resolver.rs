use std::sync::Arc;

use tracing::{info, instrument};

use super::{
    geocoding_service::{
        geocoding_service::Geocoder, types::geocoding_service_error::GeocodingServiceError,
    },
    transit_service::{
        transit_service::StopLocator, types::transit_service_error::TransitServiceError,
    },
};
use crate::types::stop::Stop;

#[derive(Debug, PartialEq)]
pub enum StopResolverError {
    Geocoding(GeocodingServiceError),
    Transit(TransitServiceError),
}

impl std::fmt::Display for StopResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StopResolverError::Geocoding(e) => write!(f, "{}", e),
            StopResolverError::Transit(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StopResolverError {}

#[derive(Clone, Debug, PartialEq)]
pub struct NearestStop {
    pub stop: Stop,
    pub message: String,
}

impl NearestStop {
    /// Raw MBTA wheelchair boarding code.
    pub fn code(&self) -> i64 {
        self.stop.wheelchair_boarding.code()
    }
}

/// Place name -> coordinates -> nearest MBTA stop.
#[derive(Clone)]
pub struct StopResolver {
    geocoder: Arc<dyn Geocoder>,
    stop_locator: Arc<dyn StopLocator>,
}

impl StopResolver {
    pub fn new(geocoder: Arc<dyn Geocoder>, stop_locator: Arc<dyn StopLocator>) -> Self {
        Self {
            geocoder,
            stop_locator,
        }
    }

    #[instrument(skip(self))]
    pub async fn find_stop_near(&self, place_name: &str) -> Result<NearestStop, StopResolverError> {
        let coordinate = self
            .geocoder
            .geocode(place_name)
            .await
            .map_err(StopResolverError::Geocoding)?;

        let stop = self
            .stop_locator
            .nearest_stop(&coordinate)
            .await
            .map_err(StopResolverError::Transit)?;

        let message = format!(
            "The nearest MBTA stop is {}. {}",
            stop.name,
            stop.wheelchair_boarding.message()
        );
        info!("{}", message);

        Ok(NearestStop { stop, message })
    }
}
