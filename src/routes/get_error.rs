use axum::response::Html;
#[cfg(test)]
use axum_macros::debug_handler;

use crate::utils::{
    app_error::{AppError, GENERIC_ERROR_MESSAGE},
    templates::{self, ErrorPage, HOME_URL},
};

#[cfg_attr(test, debug_handler)]
pub async fn get_error() -> Result<Html<String>, AppError> {
    Ok(Html(templates::render(
        "error.html",
        &ErrorPage {
            error_message: GENERIC_ERROR_MESSAGE.to_string(),
            home_url: HOME_URL,
        },
    )?))
}
