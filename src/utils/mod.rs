pub mod app_error;
pub mod json_fetcher;
pub mod templates;
pub mod validated_form;
