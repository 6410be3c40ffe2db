//! Error types for email addresses

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::Email;

/// Errors that can occur when storing an email address
#[derive(Debug, Error)]
pub enum CreateEmailAddressError {
    /// The store already holds this email address
    #[error("email address {email} already exists")]
    DuplicateEmailAddress {
        /// Email
        email: Email,
    },

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when looking up a user's email address
#[derive(Debug, Error)]
pub enum GetEmailAddressError {
    /// No matching email address
    #[error("email address {email} not found for user with id \"{user_id}\"")]
    EmailAddressNotFound {
        /// UUID of the user
        user_id: Uuid,

        /// Email that was looked up
        email: Email,
    },

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when looking up a user's primary email address
#[derive(Debug, Error)]
pub enum GetPrimaryEmailAddressError {
    /// The user has no primary email address
    #[error("user with id \"{0}\" has no primary email address")]
    NoPrimaryEmailAddress(Uuid),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when listing email addresses
#[derive(Debug, Error)]
pub enum ListEmailAddressesError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when sending an email confirmation
#[derive(Debug, Error)]
pub enum SendConfirmationError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when adding an email address
#[derive(Debug, Error)]
pub enum AddEmailError {
    /// The address was stored but its confirmation could not be sent
    #[error("could not send email confirmation")]
    ConfirmationFailed(#[source] SendConfirmationError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<SendConfirmationError> for AddEmailError {
    fn from(err: SendConfirmationError) -> Self {
        debug!("SendConfirmationError -> AddEmailError");

        AddEmailError::ConfirmationFailed(err)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_email_address_not_found_message() {
        let user_id = Uuid::now_v7();
        let err = GetEmailAddressError::EmailAddressNotFound {
            user_id,
            email: Email::new_unchecked("email@example.com"),
        };

        assert_eq!(
            err.to_string(),
            format!("email address email@example.com not found for user with id \"{user_id}\"")
        );
    }

    #[test]
    fn test_send_confirmation_error_becomes_confirmation_failed() {
        let err: AddEmailError = SendConfirmationError::UnknownError(anyhow!("boom")).into();

        assert!(matches!(err, AddEmailError::ConfirmationFailed(_)));
    }
}
