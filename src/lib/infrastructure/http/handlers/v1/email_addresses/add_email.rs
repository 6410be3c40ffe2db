//! Add email address handler

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::accounts::{
        email_addresses::{
            AddEmailOptions, AddedEmail, Email, EmailAddressFields, EmailAddressManager,
        },
        email_confirmations::EmailConfirmationManager,
        users::{RequestContext, User},
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        handlers::v1::email_addresses::EmailAddressResponse,
        state::AppState,
    },
};

fn default_confirm() -> bool {
    true
}

/// Add email address request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddEmailBody {
    /// The email to add
    #[schema(example = "email@example.com")]
    email: String,

    /// Make this the user's main email address
    #[serde(default)]
    primary: bool,

    /// Send a confirmation for the new address
    #[serde(default = "default_confirm")]
    confirm: bool,
}

/// Add an email address to a user
#[utoipa::path(
    post,
    operation_id = "add_email",
    tag = "Email addresses",
    path = "/api/v1/users/{id}/emails",
    request_body = AddEmailBody,
    params(
        ("id" = Uuid, Path, description = "The UUID of the user", example = "550e8400-e29b-41d4-a716-446655440000"),
    ),
    responses(
        (status = StatusCode::CREATED, description = "Email address added", body = EmailAddressResponse),
        (status = StatusCode::CONFLICT, description = "Email address already exists", body = ErrorResponse),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Unprocessable entity", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailAddressManager, C: EmailConfirmationManager>(
    State(state): State<AppState<E, C>>,
    Path(user_id): Path<Uuid>,
    request: Result<Json<AddEmailBody>, JsonRejection>,
) -> Result<(StatusCode, Json<EmailAddressResponse>), ApiError> {
    let Json(request) = request?;
    let email = Email::new(&request.email)?;

    let added = state
        .email_addresses
        .add_email(
            &RequestContext::new(&state.config.base_url),
            &User::new(user_id),
            &email,
            EmailAddressFields {
                verified: false,
                primary: request.primary,
            },
            AddEmailOptions {
                confirm: request.confirm,
                signup: false,
            },
        )
        .await?;

    match added {
        AddedEmail::Created(address) => Ok((StatusCode::CREATED, Json(address.into()))),
        AddedEmail::AlreadyExists => Err(ApiError::new_409(&format!(
            "Email address \"{email}\" already exists"
        ))),
    }
}
