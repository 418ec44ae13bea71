use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    config::AppConfig,
    routes::apply_routes,
    services::{
        geocoding_service::geocoding_service::GeocodingService,
        stop_resolver::StopResolver, transit_service::transit_service::TransitService,
        weather_service::weather_service::WeatherService,
    },
    types::app_state::AppState,
    utils::json_fetcher::JsonFetcher,
};

pub fn gen_app(config: &AppConfig) -> Router {
    let fetcher = JsonFetcher::new(config.request_timeout);

    let state = AppState {
        stop_resolver: StopResolver::new(
            Arc::new(GeocodingService::new(
                config.geocoding.clone(),
                fetcher.clone(),
            )),
            Arc::new(TransitService::new(config.transit.clone(), fetcher.clone())),
        ),
        weather_lookup: Arc::new(WeatherService::new(config.weather.clone(), fetcher)),
    };

    apply_routes(Router::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub mapbox_server: mockito::ServerGuard,
    pub mbta_server: mockito::ServerGuard,
    pub weather_server: mockito::ServerGuard,
}

/// App wired to three fresh mockito servers, one per provider.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let mapbox_server = mockito::Server::new_async().await;
    let mbta_server = mockito::Server::new_async().await;
    let weather_server = mockito::Server::new_async().await;

    let config = AppConfig::from_lookup(|key| {
        match key {
            "MAPBOX_HOST" => Some(mapbox_server.url()),
            "MBTA_HOST" => Some(mbta_server.url()),
            "WEATHER_HOST" => Some(weather_server.url()),
            "MAPBOX_TOKEN" | "MBTA_API_KEY" | "WEATHER_API_KEY" => Some("key".to_string()),
            "REQUEST_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        }
    })
    .expect("mock config is complete");

    MockApp {
        app: gen_app(&config),
        mapbox_server,
        mbta_server,
        weather_server,
    }
}
