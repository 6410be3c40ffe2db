//! Error types for email confirmations

use thiserror::Error;
use tracing::debug;

use crate::domain::accounts::email_addresses::errors::SendConfirmationError;

/// Errors that can occur when storing an email confirmation
#[derive(Debug, Error)]
pub enum CreateEmailConfirmationError {
    /// A confirmation with the same key already exists
    #[error("confirmation key already exists")]
    DuplicateKey,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when listing email confirmations
#[derive(Debug, Error)]
pub enum ListEmailConfirmationsError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when deleting email confirmations
#[derive(Debug, Error)]
pub enum DeleteEmailConfirmationsError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<CreateEmailConfirmationError> for SendConfirmationError {
    fn from(err: CreateEmailConfirmationError) -> Self {
        debug!("CreateEmailConfirmationError -> SendConfirmationError");

        match err {
            CreateEmailConfirmationError::DuplicateKey => {
                SendConfirmationError::UnknownError(anyhow::anyhow!("confirmation key collision"))
            }
            CreateEmailConfirmationError::UnknownError(e) => SendConfirmationError::UnknownError(e),
        }
    }
}
