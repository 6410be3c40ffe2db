//! Get a user's email address

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    domain::accounts::{
        email_addresses::{Email, EmailAddressManager},
        email_confirmations::EmailConfirmationManager,
        users::User,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        handlers::v1::email_addresses::EmailAddressResponse,
        state::AppState,
    },
};

/// Get one of a user's email addresses, matching the email ignoring case
#[utoipa::path(
    get,
    operation_id = "get_email_address_for_user",
    tag = "Email addresses",
    path = "/api/v1/users/{id}/emails/{email}",
    params(
        ("id" = Uuid, Path, description = "The UUID of the user", example = "550e8400-e29b-41d4-a716-446655440000"),
        ("email" = String, Path, description = "The email to look up", example = "email@example.com"),
    ),
    responses(
        (status = StatusCode::OK, description = "Email address found", body = EmailAddressResponse),
        (status = StatusCode::NOT_FOUND, description = "Email address not found", body = ErrorResponse),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid email", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailAddressManager, C: EmailConfirmationManager>(
    State(state): State<AppState<E, C>>,
    Path((user_id, email)): Path<(Uuid, String)>,
) -> Result<Json<EmailAddressResponse>, ApiError> {
    let email = Email::new(&email)?;

    let address = state
        .email_addresses
        .get_for_user(&User::new(user_id), &email)
        .await?;

    Ok(Json(address.into()))
}
