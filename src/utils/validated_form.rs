use std::error::Error;

use axum::{
    async_trait,
    extract::{Form, FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::app_error::AppError;

/// Form body that has passed `validator` checks. Rejections render the error page.
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(data) = match Form::<T>::from_request(req, state).await {
            Ok(data) => data,
            Err(e) => match e.source() {
                Some(source) => {
                    return Err(AppError::new(
                        StatusCode::BAD_REQUEST,
                        format!("Invalid form: {}", source).as_str(),
                    ));
                }
                None => {
                    return Err(AppError::new(
                        StatusCode::BAD_REQUEST,
                        e.body_text().as_str(),
                    ));
                }
            },
        };

        data.validate()
            .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, &first_message(&e)))?;

        Ok(ValidatedForm(data))
    }
}

/// The message of the first failing field, falling back to the full report.
fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| format!("Invalid form: {}", errors))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Validate, Deserialize)]
    struct Payload {
        #[validate(length(min = 1, message = "Name is required."))]
        name: String,
        #[validate(range(max = 10))]
        count: u32,
    }

    #[test]
    fn first_message_prefers_custom_message() {
        let errors = Payload {
            name: String::new(),
            count: 1,
        }
        .validate()
        .unwrap_err();

        assert_eq!(first_message(&errors), "Name is required.");
    }

    #[test]
    fn first_message_falls_back_to_report() {
        let errors = Payload {
            name: "ok".to_string(),
            count: 11,
        }
        .validate()
        .unwrap_err();

        assert!(first_message(&errors).starts_with("Invalid form: "));
    }
}
