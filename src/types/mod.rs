pub mod app_state;
pub mod coordinate;
pub mod stop;
pub mod weather_report;
pub mod wheelchair_boarding;
