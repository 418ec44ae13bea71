use axum::{extract::State, response::Html};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

use crate::{
    types::app_state::AppState,
    utils::{
        app_error::AppError,
        templates::{self, StationPage, HOME_URL},
        validated_form::ValidatedForm,
    },
};

#[derive(Validate, Deserialize)]
pub struct NearestMbtaForm {
    #[serde(rename = "Location", default)]
    #[validate(length(min = 1, message = "Please enter a location."))]
    pub location: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_nearest_mbta(
    State(state): State<AppState>,
    ValidatedForm(NearestMbtaForm { location }): ValidatedForm<NearestMbtaForm>,
) -> Result<Html<String>, AppError> {
    let nearest = state
        .stop_resolver
        .find_stop_near(&location)
        .await
        .map_err(|e| {
            error!("Failed to find stop near {:?}: {}", location, e);
            AppError::internal()
        })?;

    let weather = state
        .weather_lookup
        .get_weather(&location)
        .await
        .map_err(|e| {
            error!("Failed to fetch weather: {}", e);
            AppError::internal()
        })?;

    let accessible = nearest.code();

    Ok(Html(templates::render(
        "mbta_station.html",
        &StationPage {
            stop_name: nearest.stop.name,
            result: nearest.message,
            accessible,
            weather: weather.display(),
            home_url: HOME_URL,
        },
    )?))
}
