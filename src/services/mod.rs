pub mod geocoding_service;
pub mod stop_resolver;
pub mod transit_service;
pub mod weather_service;
