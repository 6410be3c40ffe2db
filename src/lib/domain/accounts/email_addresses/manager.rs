//! Email address manager

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use crate::domain::accounts::{
    email_addresses::{
        errors::{
            AddEmailError, CreateEmailAddressError, GetEmailAddressError,
            GetPrimaryEmailAddressError, ListEmailAddressesError,
        },
        AddEmailOptions, AddedEmail, ConfirmationSender, Email, EmailAddress, EmailAddressFields,
        EmailAddressRepository, NewEmailAddress,
    },
    users::{RequestContext, User},
};

/// Email address manager
#[async_trait]
pub trait EmailAddressManager: Clone + Send + Sync + 'static {
    /// Adds an email address to a user.
    ///
    /// # Arguments
    /// * `requester` - The request adding the address, handed to the confirmation sender.
    /// * `user` - The [`User`] who will own the address.
    /// * `email` - The [`Email`] to add.
    /// * `fields` - Initial [`EmailAddressFields`] of the new address.
    /// * `options` - Whether to send a confirmation, and whether this is a signup.
    ///
    /// # Returns
    /// [`AddedEmail::Created`] with the stored address, or [`AddedEmail::AlreadyExists`] when
    /// the store rejects the address as a duplicate. Any other failure is an [`AddEmailError`].
    async fn add_email(
        &self,
        requester: &RequestContext,
        user: &User,
        email: &Email,
        fields: EmailAddressFields,
        options: AddEmailOptions,
    ) -> Result<AddedEmail, AddEmailError>;

    /// Gets the user's primary email address, or [`None`] if there isn't one.
    async fn get_primary(
        &self,
        user: &User,
    ) -> Result<Option<EmailAddress>, GetPrimaryEmailAddressError>;

    /// Lists the distinct users owning a verified address with exactly this email.
    async fn get_users_for(&self, email: &Email) -> Result<Vec<Uuid>, ListEmailAddressesError>;

    /// Attaches `addresses` to `user`, replacing anything cached before.
    ///
    /// Addresses inserted during a request may not be readable yet from a
    /// replica, so callers that just wrote them cache them here and later
    /// lookups through [`EmailAddressManager::get_for_user`] are served from
    /// the cache.
    fn fill_cache_for_user(&self, user: &mut User, addresses: Vec<EmailAddress>);

    /// Gets one of the user's email addresses, matching the email ignoring case.
    ///
    /// Looks only at the cache when it has been filled, otherwise asks the store.
    async fn get_for_user(
        &self,
        user: &User,
        email: &Email,
    ) -> Result<EmailAddress, GetEmailAddressError>;
}

#[cfg(test)]
mock! {
    pub EmailAddressManager {}

    impl Clone for EmailAddressManager {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl EmailAddressManager for EmailAddressManager {
        async fn add_email(
            &self,
            requester: &RequestContext,
            user: &User,
            email: &Email,
            fields: EmailAddressFields,
            options: AddEmailOptions,
        ) -> Result<AddedEmail, AddEmailError>;
        async fn get_primary(&self, user: &User) -> Result<Option<EmailAddress>, GetPrimaryEmailAddressError>;
        async fn get_users_for(&self, email: &Email) -> Result<Vec<Uuid>, ListEmailAddressesError>;
        fn fill_cache_for_user(&self, user: &mut User, addresses: Vec<EmailAddress>);
        async fn get_for_user(&self, user: &User, email: &Email) -> Result<EmailAddress, GetEmailAddressError>;
    }
}

/// Email address manager implementation
#[derive(Debug, Clone)]
pub struct EmailAddressManagerImpl<R, S>
where
    R: EmailAddressRepository,
    S: ConfirmationSender,
{
    repo: Arc<R>,
    sender: Arc<S>,
}

impl<R, S> EmailAddressManagerImpl<R, S>
where
    R: EmailAddressRepository,
    S: ConfirmationSender,
{
    /// Creates a new email address manager
    pub fn new(repo: Arc<R>, sender: Arc<S>) -> Self {
        Self { repo, sender }
    }
}

#[async_trait]
impl<R, S> EmailAddressManager for EmailAddressManagerImpl<R, S>
where
    R: EmailAddressRepository,
    S: ConfirmationSender,
{
    async fn add_email(
        &self,
        requester: &RequestContext,
        user: &User,
        email: &Email,
        fields: EmailAddressFields,
        options: AddEmailOptions,
    ) -> Result<AddedEmail, AddEmailError> {
        let new_email_address = NewEmailAddress::new(Uuid::now_v7(), user, email.clone(), fields);

        let email_address = match self.repo.create_email_address(&new_email_address).await {
            Ok(email_address) => email_address,
            Err(CreateEmailAddressError::DuplicateEmailAddress { email }) => {
                debug!("not adding duplicate email address {email} for user {}", user.id);

                return Ok(AddedEmail::AlreadyExists);
            }
            Err(CreateEmailAddressError::UnknownError(err)) => return Err(err.into()),
        };

        if options.confirm && !email_address.verified {
            self.sender
                .send_confirmation(requester, &email_address, options.signup)
                .await?;
        }

        Ok(AddedEmail::Created(email_address))
    }

    async fn get_primary(
        &self,
        user: &User,
    ) -> Result<Option<EmailAddress>, GetPrimaryEmailAddressError> {
        match self.repo.get_primary_email_address(&user.id).await {
            Ok(email_address) => Ok(Some(email_address)),
            Err(GetPrimaryEmailAddressError::NoPrimaryEmailAddress(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn get_users_for(&self, email: &Email) -> Result<Vec<Uuid>, ListEmailAddressesError> {
        let addresses = self.repo.list_verified_email_addresses(email).await?;

        let mut users = Vec::with_capacity(addresses.len());

        for address in addresses {
            if !users.contains(&address.user_id) {
                users.push(address.user_id);
            }
        }

        Ok(users)
    }

    fn fill_cache_for_user(&self, user: &mut User, addresses: Vec<EmailAddress>) {
        user.set_email_address_cache(addresses);
    }

    async fn get_for_user(
        &self,
        user: &User,
        email: &Email,
    ) -> Result<EmailAddress, GetEmailAddressError> {
        let Some(addresses) = user.cached_email_addresses() else {
            return self.repo.get_email_address_for_user(&user.id, email).await;
        };

        addresses
            .iter()
            .find(|address| address.email.eq_ignore_case(email))
            .cloned()
            .ok_or_else(|| GetEmailAddressError::EmailAddressNotFound {
                user_id: user.id,
                email: email.clone(),
            })
    }
}
