//! Version 1 of the API

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::accounts::{
        email_addresses::EmailAddressManager, email_confirmations::EmailConfirmationManager,
    },
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod email_addresses;
pub mod email_confirmations;
pub mod stoplight;
pub mod uptime;

/// Routes for `/api/v1`
pub fn router<E, C>() -> Router<AppState<E, C>>
where
    E: EmailAddressManager,
    C: EmailConfirmationManager,
{
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler::<E, C>))
        .route("/users/:id/emails", post(email_addresses::add_email::handler::<E, C>))
        .route(
            "/users/:id/emails/primary",
            get(email_addresses::get_primary::handler::<E, C>),
        )
        .route(
            "/users/:id/emails/:email",
            get(email_addresses::get_for_user::handler::<E, C>),
        )
        .route(
            "/emails/:email/users",
            get(email_addresses::get_users_for::handler::<E, C>),
        )
        .route(
            "/email-confirmations/expired",
            get(email_confirmations::list_expired::handler::<E, C>)
                .delete(email_confirmations::delete_expired::handler::<E, C>),
        )
        .route(
            "/email-confirmations/valid",
            get(email_confirmations::list_valid::handler::<E, C>),
        )
}
