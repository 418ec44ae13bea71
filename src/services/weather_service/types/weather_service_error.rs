use crate::utils::json_fetcher::FetchError;

#[derive(Debug, PartialEq)]
pub enum WeatherServiceError {
    Fetch(FetchError),
    NoConditions,
}

impl std::fmt::Display for WeatherServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WeatherServiceError::Fetch(e) => write!(f, "Weather request failed: {}", e),
            WeatherServiceError::NoConditions => write!(f, "Weather response had no conditions"),
        }
    }
}

impl std::error::Error for WeatherServiceError {}
