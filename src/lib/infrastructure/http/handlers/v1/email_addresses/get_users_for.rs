//! List the users owning a verified email

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::accounts::{
        email_addresses::{Email, EmailAddressManager},
        email_confirmations::EmailConfirmationManager,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Users owning a verified email
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetUsersForResponse {
    /// UUIDs of the users
    pub users: Vec<Uuid>,
}

/// List the users who have verified an email
#[utoipa::path(
    get,
    operation_id = "get_users_for_email",
    tag = "Email addresses",
    path = "/api/v1/emails/{email}/users",
    params(
        ("email" = String, Path, description = "The email, matched exactly", example = "email@example.com"),
    ),
    responses(
        (status = StatusCode::OK, description = "Users found", body = GetUsersForResponse),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid email", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailAddressManager, C: EmailConfirmationManager>(
    State(state): State<AppState<E, C>>,
    Path(email): Path<String>,
) -> Result<Json<GetUsersForResponse>, ApiError> {
    let email = Email::new(&email)?;

    let users = state.email_addresses.get_users_for(&email).await?;

    Ok(Json(GetUsersForResponse { users }))
}
