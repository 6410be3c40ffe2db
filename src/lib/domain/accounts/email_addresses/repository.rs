//! Email address repository module

use async_trait::async_trait;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use crate::domain::accounts::email_addresses::{
    errors::{
        CreateEmailAddressError, GetEmailAddressError, GetPrimaryEmailAddressError,
        ListEmailAddressesError,
    },
    Email, EmailAddress, NewEmailAddress,
};

/// Email address repository
#[async_trait]
pub trait EmailAddressRepository: Clone + Send + Sync + 'static {
    /// Store a new email address
    async fn create_email_address(
        &self,
        new_email_address: &NewEmailAddress,
    ) -> Result<EmailAddress, CreateEmailAddressError>;

    /// Get the email address flagged as primary for a user
    async fn get_primary_email_address(
        &self,
        user_id: &Uuid,
    ) -> Result<EmailAddress, GetPrimaryEmailAddressError>;

    /// List verified email addresses whose email matches exactly, casing included
    async fn list_verified_email_addresses(
        &self,
        email: &Email,
    ) -> Result<Vec<EmailAddress>, ListEmailAddressesError>;

    /// Get a user's email address, matching the email ignoring case
    async fn get_email_address_for_user(
        &self,
        user_id: &Uuid,
        email: &Email,
    ) -> Result<EmailAddress, GetEmailAddressError>;
}

#[cfg(test)]
mock! {
    pub EmailAddressRepository {}

    impl Clone for EmailAddressRepository {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl EmailAddressRepository for EmailAddressRepository {
        async fn create_email_address(&self, new_email_address: &NewEmailAddress) -> Result<EmailAddress, CreateEmailAddressError>;
        async fn get_primary_email_address(&self, user_id: &Uuid) -> Result<EmailAddress, GetPrimaryEmailAddressError>;
        async fn list_verified_email_addresses(&self, email: &Email) -> Result<Vec<EmailAddress>, ListEmailAddressesError>;
        async fn get_email_address_for_user(&self, user_id: &Uuid, email: &Email) -> Result<EmailAddress, GetEmailAddressError>;
    }
}
