//! List valid email confirmations

use axum::{extract::State, Json};

use crate::{
    domain::accounts::{
        email_addresses::EmailAddressManager, email_confirmations::EmailConfirmationManager,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        handlers::v1::email_confirmations::EmailConfirmationsResponse,
        state::AppState,
    },
};

/// List the email confirmations that can still be used
#[utoipa::path(
    get,
    operation_id = "list_valid_email_confirmations",
    tag = "Email confirmations",
    path = "/api/v1/email-confirmations/valid",
    responses(
        (status = StatusCode::OK, description = "Valid confirmations", body = EmailConfirmationsResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailAddressManager, C: EmailConfirmationManager>(
    State(state): State<AppState<E, C>>,
) -> Result<Json<EmailConfirmationsResponse>, ApiError> {
    let valid = state.email_confirmations.all_valid().await?;

    Ok(Json(valid.into()))
}
