//! Email confirmation model

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A confirmation issued for an email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfirmation {
    /// Confirmation UUID
    pub id: Uuid,

    /// UUID of the email address being confirmed
    pub email_address_id: Uuid,

    /// Confirmation key
    pub key: String,

    /// Created at date in UTC
    pub created: DateTime<Utc>,

    /// Sent at date in UTC
    pub sent: DateTime<Utc>,
}

/// New email confirmation request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEmailConfirmation {
    /// Confirmation UUID
    pub id: Uuid,

    /// UUID of the email address being confirmed
    pub email_address_id: Uuid,

    /// Confirmation key
    pub key: String,

    /// Issued at date in UTC, stored as both `created` and `sent`
    pub sent: DateTime<Utc>,
}

/// A predicate over email confirmations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmationFilter {
    /// Sent strictly before the given instant
    SentBefore(DateTime<Utc>),
}

impl ConfirmationFilter {
    /// Whether `confirmation` satisfies the predicate
    pub fn matches(&self, confirmation: &EmailConfirmation) -> bool {
        match self {
            Self::SentBefore(threshold) => confirmation.sent < *threshold,
        }
    }
}
