use std::sync::Arc;

use crate::services::{stop_resolver::StopResolver, weather_service::weather_service::WeatherLookup};

#[derive(Clone)]
pub struct AppState {
    pub stop_resolver: StopResolver,
    pub weather_lookup: Arc<dyn WeatherLookup>,
}
