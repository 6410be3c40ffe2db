//! Get a user's primary email address

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    domain::accounts::{
        email_addresses::EmailAddressManager, email_confirmations::EmailConfirmationManager,
        users::User,
    },
    infrastructure::http::{
        errors::{no_primary_email_address, ApiError, ErrorResponse},
        handlers::v1::email_addresses::EmailAddressResponse,
        state::AppState,
    },
};

/// Get a user's primary email address
#[utoipa::path(
    get,
    operation_id = "get_primary_email_address",
    tag = "Email addresses",
    path = "/api/v1/users/{id}/emails/primary",
    params(
        ("id" = Uuid, Path, description = "The UUID of the user", example = "550e8400-e29b-41d4-a716-446655440000"),
    ),
    responses(
        (status = StatusCode::OK, description = "Primary email address found", body = EmailAddressResponse),
        (status = StatusCode::NOT_FOUND, description = "User has no primary email address", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailAddressManager, C: EmailConfirmationManager>(
    State(state): State<AppState<E, C>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<EmailAddressResponse>, ApiError> {
    state
        .email_addresses
        .get_primary(&User::new(user_id))
        .await?
        .map(|address| Json(address.into()))
        .ok_or_else(|| no_primary_email_address(&user_id.to_string()))
}
