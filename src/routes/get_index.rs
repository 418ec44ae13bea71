use axum::response::Html;
#[cfg(test)]
use axum_macros::debug_handler;

use super::NEAREST_MBTA_PATH;
use crate::utils::{
    app_error::AppError,
    templates::{self, IndexPage},
};

#[cfg_attr(test, debug_handler)]
pub async fn get_index() -> Result<Html<String>, AppError> {
    Ok(Html(templates::render(
        "index.html",
        &IndexPage {
            form_action: NEAREST_MBTA_PATH,
        },
    )?))
}
