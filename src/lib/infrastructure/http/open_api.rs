//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

/// OpenAPI description of the v1 API
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Account Emails"),
    paths(
        email_addresses::add_email::handler,
        email_addresses::get_for_user::handler,
        email_addresses::get_primary::handler,
        email_addresses::get_users_for::handler,
        email_confirmations::list_expired::handler,
        email_confirmations::list_valid::handler,
        email_confirmations::delete_expired::handler,
        uptime::handler
    ),
    components(schemas(
        email_addresses::EmailAddressResponse,
        email_addresses::add_email::AddEmailBody,
        email_addresses::get_users_for::GetUsersForResponse,
        email_confirmations::EmailConfirmationResponse,
        email_confirmations::EmailConfirmationsResponse,
        email_confirmations::delete_expired::DeleteExpiredResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_paths() {
        let docs = ApiDocs::openapi();

        assert!(docs.paths.paths.contains_key("/api/v1/users/{id}/emails"));
        assert!(docs
            .paths
            .paths
            .contains_key("/api/v1/users/{id}/emails/primary"));
        assert!(docs
            .paths
            .paths
            .contains_key("/api/v1/email-confirmations/expired"));
    }
}
