pub mod openweathermap_current_response;
pub mod weather_service_error;
