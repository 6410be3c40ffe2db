//! Email confirmation repository module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::accounts::email_confirmations::{
    errors::{
        CreateEmailConfirmationError, DeleteEmailConfirmationsError, ListEmailConfirmationsError,
    },
    ConfirmationFilter, EmailConfirmation, NewEmailConfirmation,
};

/// Email confirmation repository
#[async_trait]
pub trait EmailConfirmationRepository: Clone + Send + Sync + 'static {
    /// Store a new email confirmation
    async fn create_email_confirmation(
        &self,
        confirmation: &NewEmailConfirmation,
    ) -> Result<EmailConfirmation, CreateEmailConfirmationError>;

    /// List confirmations matching `filter`
    async fn filter_email_confirmations(
        &self,
        filter: &ConfirmationFilter,
    ) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;

    /// List confirmations not matching `filter`
    async fn exclude_email_confirmations(
        &self,
        filter: &ConfirmationFilter,
    ) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;

    /// Delete confirmations matching `filter`, returning how many were removed
    async fn delete_email_confirmations(
        &self,
        filter: &ConfirmationFilter,
    ) -> Result<u64, DeleteEmailConfirmationsError>;
}

#[cfg(test)]
mock! {
    pub EmailConfirmationRepository {}

    impl Clone for EmailConfirmationRepository {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl EmailConfirmationRepository for EmailConfirmationRepository {
        async fn create_email_confirmation(&self, confirmation: &NewEmailConfirmation) -> Result<EmailConfirmation, CreateEmailConfirmationError>;
        async fn filter_email_confirmations(&self, filter: &ConfirmationFilter) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;
        async fn exclude_email_confirmations(&self, filter: &ConfirmationFilter) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;
        async fn delete_email_confirmations(&self, filter: &ConfirmationFilter) -> Result<u64, DeleteEmailConfirmationsError>;
    }
}
