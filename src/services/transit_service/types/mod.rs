pub mod mbta_get_stops_response;
pub mod transit_service_error;
