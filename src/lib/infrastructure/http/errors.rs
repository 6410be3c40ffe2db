//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::accounts::{
    email_addresses::{
        errors::{
            AddEmailError, GetEmailAddressError, GetPrimaryEmailAddressError,
            ListEmailAddressesError,
        },
        EmailError,
    },
    email_confirmations::errors::{DeleteEmailConfirmationsError, ListEmailConfirmationsError},
};

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Internal server error")]
    pub error: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new not found error
    pub fn new_404(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Create a new conflict error
    pub fn new_409(message: &str) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Create a new unprocessable entity error
    pub fn new_422(message: &str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        unknown_error(err)
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::EmptyEmail => ApiError::new_422("Please provide an email address"),
            EmailError::InvalidEmail => ApiError::new_422("Please provide a valid email address"),
        }
    }
}

impl From<AddEmailError> for ApiError {
    fn from(err: AddEmailError) -> Self {
        match err {
            AddEmailError::ConfirmationFailed(err) => {
                error!("could not send email confirmation: {err:?}");
                ApiError::new_500("Could not send email confirmation")
            }
            AddEmailError::UnknownError(err) => unknown_error(err),
        }
    }
}

impl From<GetEmailAddressError> for ApiError {
    fn from(err: GetEmailAddressError) -> Self {
        match err {
            GetEmailAddressError::EmailAddressNotFound { email, .. } => {
                ApiError::new_404(&format!("Email address \"{email}\" not found"))
            }
            GetEmailAddressError::UnknownError(err) => unknown_error(err),
        }
    }
}

impl From<GetPrimaryEmailAddressError> for ApiError {
    fn from(err: GetPrimaryEmailAddressError) -> Self {
        match err {
            GetPrimaryEmailAddressError::NoPrimaryEmailAddress(id) => {
                no_primary_email_address(&id.to_string())
            }
            GetPrimaryEmailAddressError::UnknownError(err) => unknown_error(err),
        }
    }
}

impl From<ListEmailAddressesError> for ApiError {
    fn from(err: ListEmailAddressesError) -> Self {
        match err {
            ListEmailAddressesError::UnknownError(err) => unknown_error(err),
        }
    }
}

impl From<ListEmailConfirmationsError> for ApiError {
    fn from(err: ListEmailConfirmationsError) -> Self {
        match err {
            ListEmailConfirmationsError::UnknownError(err) => unknown_error(err),
        }
    }
}

impl From<DeleteEmailConfirmationsError> for ApiError {
    fn from(err: DeleteEmailConfirmationsError) -> Self {
        match err {
            DeleteEmailConfirmationsError::UnknownError(err) => unknown_error(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

/// The 404 returned when a user has no primary email address
pub fn no_primary_email_address(user_id: &str) -> ApiError {
    ApiError::new_404(&format!(
        "User with id \"{user_id}\" has no primary email address"
    ))
}

fn unknown_error(err: anyhow::Error) -> ApiError {
    error!("unknown error: {err:?}");

    ApiError::new_500("An unknown error occurred, please try again")
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::domain::accounts::email_addresses::Email;

    use super::*;

    #[tokio::test]
    async fn test_error_response() -> TestResult {
        let error = ApiError::new_500("Internal server error");

        let response = error.into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, r#"{"error":"Internal server error"}"#);

        Ok(())
    }

    #[test]
    fn test_unknown_errors_are_not_leaked() {
        let api_error = ApiError::from(anyhow!("password authentication failed for user"));

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_error.message,
            "An unknown error occurred, please try again"
        );
    }

    #[test]
    fn test_email_address_not_found_is_404() {
        let api_error = ApiError::from(GetEmailAddressError::EmailAddressNotFound {
            user_id: Uuid::now_v7(),
            email: Email::new_unchecked("email@example.com"),
        });

        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(
            api_error.message,
            "Email address \"email@example.com\" not found"
        );
    }

    #[test]
    fn test_invalid_email_is_422() {
        let api_error = ApiError::from(EmailError::InvalidEmail);

        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
