//! Email confirmation sender

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::accounts::{
    email_addresses::{errors::SendConfirmationError, EmailAddress},
    users::RequestContext,
};

/// Sends a confirmation for a newly added email address
#[async_trait]
pub trait ConfirmationSender: Clone + Send + Sync + 'static {
    /// Send a confirmation for `email_address`.
    ///
    /// # Arguments
    /// * `requester` - The request that added the email address.
    /// * `email_address` - The unverified [`EmailAddress`] to confirm.
    /// * `signup` - Whether the address was added while signing up.
    async fn send_confirmation(
        &self,
        requester: &RequestContext,
        email_address: &EmailAddress,
        signup: bool,
    ) -> Result<(), SendConfirmationError>;
}

#[cfg(test)]
mock! {
    pub ConfirmationSender {}

    impl Clone for ConfirmationSender {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ConfirmationSender for ConfirmationSender {
        async fn send_confirmation(&self, requester: &RequestContext, email_address: &EmailAddress, signup: bool) -> Result<(), SendConfirmationError>;
    }
}
