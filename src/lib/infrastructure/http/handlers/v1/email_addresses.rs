//! Email address handlers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::accounts::email_addresses::EmailAddress;

pub mod add_email;
pub mod get_for_user;
pub mod get_primary;
pub mod get_users_for;

/// An email address belonging to a user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailAddressResponse {
    /// The email address UUID
    pub id: Uuid,

    /// The owning user's UUID
    pub user_id: Uuid,

    /// The email
    #[schema(example = "email@example.com")]
    pub email: String,

    /// Whether the email has been confirmed
    pub verified: bool,

    /// Whether this is the user's main email address
    pub primary: bool,
}

impl From<EmailAddress> for EmailAddressResponse {
    fn from(address: EmailAddress) -> Self {
        Self {
            id: address.id,
            user_id: address.user_id,
            email: address.email.into(),
            verified: address.verified,
            primary: address.primary,
        }
    }
}
