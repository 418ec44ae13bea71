use crate::utils::json_fetcher::FetchError;

#[derive(Debug, PartialEq)]
pub enum TransitServiceError {
    Fetch(FetchError),
    NoStops,
    UnrecognizedWheelchairBoarding(i64),
}

impl std::fmt::Display for TransitServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TransitServiceError::Fetch(e) => write!(f, "Stops request failed: {}", e),
            TransitServiceError::NoStops => write!(f, "No stops found near location"),
            TransitServiceError::UnrecognizedWheelchairBoarding(code) => {
                write!(f, "Unrecognized wheelchair boarding code: {}", code)
            }
        }
    }
}

impl std::error::Error for TransitServiceError {}
