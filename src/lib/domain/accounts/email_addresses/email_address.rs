//! Email address model

use uuid::Uuid;

use crate::domain::accounts::users::User;

use super::Email;

/// An email address belonging to a user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress {
    /// Email address UUID
    pub id: Uuid,

    /// UUID of the owning user
    pub user_id: Uuid,

    /// The email
    pub email: Email,

    /// Whether the email has been confirmed
    pub verified: bool,

    /// Whether this is the user's main email address
    pub primary: bool,
}

/// Optional fields set on a new email address
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmailAddressFields {
    /// Whether the email is already confirmed
    pub verified: bool,

    /// Whether the email becomes the user's main address
    pub primary: bool,
}

/// Controls the side effects of adding an email address
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddEmailOptions {
    /// Send a confirmation if the new address is not verified
    pub confirm: bool,

    /// The address is being added as part of signing up
    pub signup: bool,
}

/// New email address request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEmailAddress {
    id: Uuid,
    user_id: Uuid,
    email: Email,
    fields: EmailAddressFields,
}

impl NewEmailAddress {
    /// Create a new email address request for `user`
    pub fn new(id: Uuid, user: &User, email: Email, fields: EmailAddressFields) -> Self {
        Self {
            id,
            user_id: user.id,
            email,
            fields,
        }
    }

    /// Get the new email address's ID
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Get the owning user's ID
    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }

    /// Get the email
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Whether the email is already confirmed
    pub fn verified(&self) -> bool {
        self.fields.verified
    }

    /// Whether the email is the user's main address
    pub fn primary(&self) -> bool {
        self.fields.primary
    }
}

/// Outcome of adding an email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddedEmail {
    /// The email address was stored
    Created(EmailAddress),

    /// The store already holds a conflicting email address
    AlreadyExists,
}

impl AddedEmail {
    /// Returns the created email address, if any
    pub fn created(self) -> Option<EmailAddress> {
        match self {
            Self::Created(address) => Some(address),
            Self::AlreadyExists => None,
        }
    }
}
