use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::{Html, IntoResponse},
};
use tracing::error;

use super::templates::{self, ErrorPage, HOME_URL};

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred.";

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }

    /// The one failure users see, whatever actually went wrong.
    pub fn internal() -> Self {
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
    }
}

impl From<templates::TemplateError> for AppError {
    fn from(e: templates::TemplateError) -> Self {
        error!("Failed to render page: {}", e);
        AppError::internal()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        let page = ErrorPage {
            error_message: self.message,
            home_url: HOME_URL,
        };

        match templates::render("error.html", &page) {
            Ok(html) => (self.code, Html(html)).into_response(),
            Err(e) => {
                error!("Failed to render error page: {}", e);
                (self.code, page.error_message).into_response()
            }
        }
    }
}
