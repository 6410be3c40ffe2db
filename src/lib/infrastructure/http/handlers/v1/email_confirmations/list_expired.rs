//! List expired email confirmations

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

/// List the email confirmations that have expired
#[utoipa::path(
    get,
    operation_id = "list_expired_email_confirmations",
    tag = "Email confirmations",
    path = "/api/v1/email-confirmations/expired",
    responses(
        (status = StatusCode::OK, description = "Expired confirmations", body = EmailConfirmationsResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailAddressManager, C: EmailConfirmationManager>(
    State(state): State<AppState<E, C>>,
) -> Result<Json<EmailConfirmationsResponse>, ApiError> {
    let expired = state.email_confirmations.all_expired().await?;

    Ok(Json(expired.into()))
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use testresult::TestResult;

    use crate::{
        domain::accounts::email_confirmations::{
            errors::ListEmailConfirmationsError, tests::MockEmailConfirmationManager,
        },
        infrastructure::http::{
            handlers::v1::email_confirmations::{
                tests::confirmation_sent_at, EmailConfirmationsResponse,
            },
            router,
            state::tests::test_state,
        },
    };

    #[tokio::test]
    async fn test_list_expired() -> TestResult {
        let expired = confirmation_sent_at(Utc::now() - Duration::days(4));
        let expected_id = expired.id;

        let mut email_confirmations = MockEmailConfirmationManager::new();

        email_confirmations
            .expect_all_expired()
            .times(1)
            .returning(move || Ok(vec![expired.clone()]));

        let response = TestServer::new(router(test_state(None, Some(email_confirmations))))?
            .get("/api/v1/email-confirmations/expired")
            .await;

        response.assert_status_ok();
        assert!(!response.text().contains("secret-key"));

        let json = response.json::<EmailConfirmationsResponse>();

        assert_eq!(json.confirmations.len(), 1);
        assert_eq!(json.confirmations[0].id, expected_id);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_expired_store_error() -> TestResult {
        let mut email_confirmations = MockEmailConfirmationManager::new();

        email_confirmations
            .expect_all_expired()
            .times(1)
            .returning(|| Err(ListEmailConfirmationsError::UnknownError(anyhow!("timeout"))));

        let response = TestServer::new(router(test_state(None, Some(email_confirmations))))?
            .get("/api/v1/email-confirmations/expired")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
