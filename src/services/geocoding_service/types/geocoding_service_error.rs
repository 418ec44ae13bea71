use crate::utils::json_fetcher::FetchError;

#[derive(Debug, PartialEq)]
pub enum GeocodingServiceError {
    Fetch(FetchError),
    NoResults(String),
}

impl std::fmt::Display for GeocodingServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeocodingServiceError::Fetch(e) => write!(f, "Geocoding request failed: {}", e),
            GeocodingServiceError::NoResults(place) => {
                write!(f, "No geocoding results for {:?}", place)
            }
        }
    }
}

impl std::error::Error for GeocodingServiceError {}
