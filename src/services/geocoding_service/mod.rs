pub mod geocoding_service;
pub mod types;
