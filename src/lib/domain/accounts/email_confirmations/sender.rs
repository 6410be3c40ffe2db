//! Token-based confirmation sender

use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    accounts::{
        email_addresses::{errors::SendConfirmationError, ConfirmationSender, EmailAddress},
        email_confirmations::{EmailConfirmationRepository, NewEmailConfirmation},
        users::RequestContext,
    },
    clock::Clock,
};

/// Issues a random confirmation key for an email address and stores it as a
/// sent [`EmailConfirmation`](super::EmailConfirmation). Delivering the key to
/// the user is left to whatever reads the confirmation link.
#[derive(Debug, Clone)]
pub struct TokenConfirmationSender<R, C>
where
    R: EmailConfirmationRepository,
    C: Clock,
{
    repo: Arc<R>,
    clock: C,
}

impl<R, C> TokenConfirmationSender<R, C>
where
    R: EmailConfirmationRepository,
    C: Clock,
{
    /// Creates a new confirmation sender
    pub fn new(repo: Arc<R>, clock: C) -> Self {
        Self { repo, clock }
    }

    fn generate_key(&self, email_address_id: &Uuid) -> String {
        let salt: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect();

        let data = format!(
            "{}{}{}",
            email_address_id,
            salt,
            self.clock.now().timestamp()
        );
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());

        URL_SAFE.encode(hasher.finalize())
    }
}

/// Link the user follows to confirm an email address
pub fn confirmation_link(base_url: &str, key: &str) -> String {
    format!("{base_url}/accounts/confirm-email/{key}/")
}

#[async_trait]
impl<R, C> ConfirmationSender for TokenConfirmationSender<R, C>
where
    R: EmailConfirmationRepository,
    C: Clock,
{
    async fn send_confirmation(
        &self,
        requester: &RequestContext,
        email_address: &EmailAddress,
        signup: bool,
    ) -> Result<(), SendConfirmationError> {
        let confirmation = NewEmailConfirmation {
            id: Uuid::now_v7(),
            email_address_id: email_address.id,
            key: self.generate_key(&email_address.id),
            sent: self.clock.now(),
        };

        let confirmation = self.repo.create_email_confirmation(&confirmation).await?;

        info!(
            email_address_id = %email_address.id,
            signup,
            "issued email confirmation"
        );
        debug!(
            "confirmation link for {}: {}",
            email_address.email,
            confirmation_link(&requester.base_url, &confirmation.key)
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use chrono::Utc;
    use testresult::TestResult;

    use crate::domain::{
        accounts::{
            email_addresses::Email,
            email_confirmations::{
                errors::CreateEmailConfirmationError, tests::MockEmailConfirmationRepository,
                EmailConfirmation,
            },
        },
        clock::FixedClock,
    };

    use super::*;

    fn unverified_address() -> EmailAddress {
        EmailAddress {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            email: Email::new_unchecked("email@example.com"),
            verified: false,
            primary: true,
        }
    }

    #[test]
    fn test_confirmation_link() {
        assert_eq!(
            confirmation_link("https://example.com", "abc"),
            "https://example.com/accounts/confirm-email/abc/"
        );
    }

    #[test]
    fn test_generated_keys_are_url_safe_and_unique() {
        let sender = TokenConfirmationSender::new(
            Arc::new(MockEmailConfirmationRepository::new()),
            FixedClock(Utc::now()),
        );
        let id = Uuid::now_v7();

        let first = sender.generate_key(&id);
        let second = sender.generate_key(&id);

        assert_eq!(44, first.len());
        assert_ne!(first, second);
        assert!(!first.contains('+') && !first.contains('/'));
    }

    #[tokio::test]
    async fn test_send_confirmation_records_sent_confirmation() -> TestResult {
        let now = Utc::now();
        let address = unverified_address();
        let address_id = address.id;

        let mut repo = MockEmailConfirmationRepository::new();

        repo.expect_create_email_confirmation()
            .times(1)
            .withf(move |c| c.email_address_id == address_id && c.sent == now && !c.key.is_empty())
            .returning(|c| {
                Ok(EmailConfirmation {
                    id: c.id,
                    email_address_id: c.email_address_id,
                    key: c.key.clone(),
                    created: c.sent,
                    sent: c.sent,
                })
            });

        let sender = TokenConfirmationSender::new(Arc::new(repo), FixedClock(now));

        sender
            .send_confirmation(&RequestContext::new("https://example.com"), &address, true)
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_confirmation_store_failure() {
        let mut repo = MockEmailConfirmationRepository::new();

        repo.expect_create_email_confirmation()
            .times(1)
            .returning(|_| Err(CreateEmailConfirmationError::UnknownError(anyhow!("down"))));

        let sender = TokenConfirmationSender::new(Arc::new(repo), FixedClock(Utc::now()));

        let result = sender
            .send_confirmation(
                &RequestContext::new("https://example.com"),
                &unverified_address(),
                false,
            )
            .await;

        assert!(matches!(result, Err(SendConfirmationError::UnknownError(_))));
    }
}
