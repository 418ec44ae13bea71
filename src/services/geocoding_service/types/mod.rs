pub mod geocoding_service_error;
pub mod mapbox_geocoding_response;
