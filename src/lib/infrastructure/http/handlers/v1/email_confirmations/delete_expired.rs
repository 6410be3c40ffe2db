//! Delete expired email confirmations

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::accounts::{
        email_addresses::EmailAddressManager, email_confirmations::EmailConfirmationManager,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Result of deleting expired confirmations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteExpiredResponse {
    /// How many confirmations were deleted
    #[schema(example = 3)]
    pub deleted: u64,
}

/// Delete every expired email confirmation
#[utoipa::path(
    delete,
    operation_id = "delete_expired_email_confirmations",
    tag = "Email confirmations",
    path = "/api/v1/email-confirmations/expired",
    responses(
        (status = StatusCode::OK, description = "Expired confirmations deleted", body = DeleteExpiredResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailAddressManager, C: EmailConfirmationManager>(
    State(state): State<AppState<E, C>>,
) -> Result<Json<DeleteExpiredResponse>, ApiError> {
    let deleted = state
        .email_confirmations
        .delete_expired_confirmations()
        .await?;

    Ok(Json(DeleteExpiredResponse { deleted }))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::accounts::email_confirmations::tests::MockEmailConfirmationManager,
        infrastructure::http::{
            handlers::v1::email_confirmations::delete_expired::DeleteExpiredResponse, router,
            state::tests::test_state,
        },
    };

    #[tokio::test]
    async fn test_delete_expired() -> TestResult {
        let mut email_confirmations = MockEmailConfirmationManager::new();

        email_confirmations
            .expect_delete_expired_confirmations()
            .times(1)
            .returning(|| Ok(2));

        let response = TestServer::new(router(test_state(None, Some(email_confirmations))))?
            .delete("/api/v1/email-confirmations/expired")
            .await;

        response.assert_status_ok();

        assert_eq!(response.json::<DeleteExpiredResponse>().deleted, 2);

        Ok(())
    }
}
