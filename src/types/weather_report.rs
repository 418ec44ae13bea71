use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    /// Degrees Fahrenheit.
    pub temperature: f64,
    pub description: String,
}

/// Display-ready pair shown on the result page.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WeatherDisplay {
    pub large: String,
    pub small: String,
}

impl WeatherReport {
    pub fn display(&self) -> WeatherDisplay {
        WeatherDisplay {
            large: format!("{}°F", self.temperature),
            small: format!("Weather: {}", self.description),
        }
    }
}
