pub mod types;
pub mod weather_service;
