use axum::{
    routing::{get, post},
    Router,
};

use crate::types::app_state::AppState;

mod get_error;
mod get_index;
mod post_nearest_mbta;

pub const NEAREST_MBTA_PATH: &str = "/nearest_mbta";

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/", get(get_index::get_index))
        .route(
            NEAREST_MBTA_PATH,
            post(post_nearest_mbta::post_nearest_mbta),
        )
        .route("/error", get(get_error::get_error))
}
