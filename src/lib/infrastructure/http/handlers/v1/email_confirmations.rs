//! Email confirmation handlers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::accounts::email_confirmations::EmailConfirmation;

pub mod delete_expired;
pub mod list_expired;
pub mod list_valid;

/// An email confirmation, without its key
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailConfirmationResponse {
    /// The confirmation UUID
    pub id: Uuid,

    /// UUID of the email address being confirmed
    pub email_address_id: Uuid,

    /// When the confirmation was created
    pub created: DateTime<Utc>,

    /// When the confirmation was sent
    pub sent: DateTime<Utc>,
}

impl From<EmailConfirmation> for EmailConfirmationResponse {
    fn from(confirmation: EmailConfirmation) -> Self {
        Self {
            id: confirmation.id,
            email_address_id: confirmation.email_address_id,
            created: confirmation.created,
            sent: confirmation.sent,
        }
    }
}

/// A list of email confirmations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailConfirmationsResponse {
    /// The confirmations
    pub confirmations: Vec<EmailConfirmationResponse>,
}

impl From<Vec<EmailConfirmation>> for EmailConfirmationsResponse {
    fn from(confirmations: Vec<EmailConfirmation>) -> Self {
        Self {
            confirmations: confirmations.into_iter().map(Into::into).collect(),
        }
    }
}
