use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct OpenWeatherMapMain {
    pub temp: f64,
}

#[derive(Deserialize, Serialize)]
pub struct OpenWeatherMapCondition {
    pub description: String,
}

#[derive(Deserialize, Serialize)]
pub struct OpenWeatherMapCurrentResponse {
    pub main: OpenWeatherMapMain,
    pub weather: Vec<OpenWeatherMapCondition>,
}
