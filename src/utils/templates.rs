use std::sync::OnceLock;

use serde::Serialize;
use tera::{Context, Tera};

use crate::types::weather_report::WeatherDisplay;

pub const HOME_URL: &str = "/";

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("mbta_station.html", include_str!("../../templates/mbta_station.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

static TERA: OnceLock<Result<Tera, String>> = OnceLock::new();

#[derive(Debug)]
pub struct TemplateError(pub String);

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Template error: {}", self.0)
    }
}

impl std::error::Error for TemplateError {}

fn load() -> Result<Tera, String> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())
        .map_err(|e| format!("{:?}", e))?;
    Ok(tera)
}

/// Renders one of the embedded pages. `.html` templates are autoescaped.
pub fn render<T: Serialize>(name: &str, page: &T) -> Result<String, TemplateError> {
    let tera = TERA
        .get_or_init(load)
        .as_ref()
        .map_err(|e| TemplateError(e.clone()))?;
    let context = Context::from_serialize(page).map_err(|e| TemplateError(e.to_string()))?;

    tera.render(name, &context)
        .map_err(|e| TemplateError(format!("{:?}", e)))
}

#[derive(Serialize)]
pub struct IndexPage {
    pub form_action: &'static str,
}

#[derive(Serialize)]
pub struct StationPage {
    pub stop_name: String,
    pub result: String,
    pub accessible: i64,
    pub weather: WeatherDisplay,
    pub home_url: &'static str,
}

#[derive(Serialize)]
pub struct ErrorPage {
    pub error_message: String,
    pub home_url: &'static str,
}
