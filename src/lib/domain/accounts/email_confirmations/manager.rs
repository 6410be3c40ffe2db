//! Email confirmation manager

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::info;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    accounts::email_confirmations::{
        errors::{DeleteEmailConfirmationsError, ListEmailConfirmationsError},
        ConfirmationFilter, EmailConfirmation, EmailConfirmationRepository,
    },
    clock::Clock,
};

/// Email confirmation manager
#[async_trait]
pub trait EmailConfirmationManager: Clone + Send + Sync + 'static {
    /// Builds the predicate selecting confirmations sent longer ago than the expiry period.
    fn expired_q(&self) -> ConfirmationFilter;

    /// Lists every expired confirmation.
    async fn all_expired(&self) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;

    /// Lists every confirmation that has not expired yet.
    async fn all_valid(&self) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;

    /// Deletes every expired confirmation.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the number of confirmations removed.
    async fn delete_expired_confirmations(&self) -> Result<u64, DeleteEmailConfirmationsError>;
}

#[cfg(test)]
mock! {
    pub EmailConfirmationManager {}

    impl Clone for EmailConfirmationManager {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl EmailConfirmationManager for EmailConfirmationManager {
        fn expired_q(&self) -> ConfirmationFilter;
        async fn all_expired(&self) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;
        async fn all_valid(&self) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError>;
        async fn delete_expired_confirmations(&self) -> Result<u64, DeleteEmailConfirmationsError>;
    }
}

/// Email confirmation manager implementation
#[derive(Debug, Clone)]
pub struct EmailConfirmationManagerImpl<R, C>
where
    R: EmailConfirmationRepository,
    C: Clock,
{
    repo: Arc<R>,
    clock: C,
    expire_after: Duration,
}

impl<R, C> EmailConfirmationManagerImpl<R, C>
where
    R: EmailConfirmationRepository,
    C: Clock,
{
    /// Creates a new email confirmation manager.
    ///
    /// Confirmations sent more than `expire_after` ago count as expired.
    pub fn new(repo: Arc<R>, clock: C, expire_after: Duration) -> Self {
        Self {
            repo,
            clock,
            expire_after,
        }
    }
}

#[async_trait]
impl<R, C> EmailConfirmationManager for EmailConfirmationManagerImpl<R, C>
where
    R: EmailConfirmationRepository,
    C: Clock,
{
    fn expired_q(&self) -> ConfirmationFilter {
        // An expiry reaching past the representable range expires nothing.
        let threshold = self
            .clock
            .now()
            .checked_sub_signed(self.expire_after)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        ConfirmationFilter::SentBefore(threshold)
    }

    async fn all_expired(&self) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError> {
        self.repo.filter_email_confirmations(&self.expired_q()).await
    }

    async fn all_valid(&self) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError> {
        self.repo.exclude_email_confirmations(&self.expired_q()).await
    }

    async fn delete_expired_confirmations(&self) -> Result<u64, DeleteEmailConfirmationsError> {
        let deleted = self
            .repo
            .delete_email_confirmations(&self.expired_q())
            .await?;

        info!(deleted, "deleted expired email confirmations");

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{DateTime, Utc};
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::domain::{
        accounts::email_confirmations::tests::MockEmailConfirmationRepository, clock::FixedClock,
    };

    use super::*;

    const EXPIRE_DAYS: i64 = 3;

    fn sent_at(sent: DateTime<Utc>) -> EmailConfirmation {
        EmailConfirmation {
            id: Uuid::now_v7(),
            email_address_id: Uuid::now_v7(),
            key: Uuid::now_v7().to_string(),
            created: sent,
            sent,
        }
    }

    /// A repository mock that evaluates filters against an in-memory table
    fn table_backed_repo(table: Arc<Mutex<Vec<EmailConfirmation>>>) -> MockEmailConfirmationRepository {
        let mut repo = MockEmailConfirmationRepository::new();

        let rows = table.clone();
        repo.expect_filter_email_confirmations().returning(move |filter| {
            Ok(rows
                .lock()
                .unwrap()
                .iter()
                .filter(|c| filter.matches(c))
                .cloned()
                .collect())
        });

        let rows = table.clone();
        repo.expect_exclude_email_confirmations().returning(move |filter| {
            Ok(rows
                .lock()
                .unwrap()
                .iter()
                .filter(|c| !filter.matches(c))
                .cloned()
                .collect())
        });

        let rows = table;
        repo.expect_delete_email_confirmations().returning(move |filter| {
            let mut rows = rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| !filter.matches(c));
            Ok((before - rows.len()) as u64)
        });

        repo
    }

    #[test]
    fn test_expired_q_threshold() {
        let now = Utc::now();

        let manager = EmailConfirmationManagerImpl::new(
            Arc::new(MockEmailConfirmationRepository::new()),
            FixedClock(now),
            Duration::days(EXPIRE_DAYS),
        );

        assert_eq!(
            manager.expired_q(),
            ConfirmationFilter::SentBefore(now - Duration::days(EXPIRE_DAYS))
        );
    }

    #[tokio::test]
    async fn test_out_of_range_expiry_keeps_confirmations_valid() -> TestResult {
        let now = Utc::now();
        let fresh = sent_at(now);

        let table = Arc::new(Mutex::new(vec![fresh.clone()]));

        let manager = EmailConfirmationManagerImpl::new(
            Arc::new(table_backed_repo(table)),
            FixedClock(now),
            Duration::days(200_000_000),
        );

        assert_eq!(
            manager.expired_q(),
            ConfirmationFilter::SentBefore(DateTime::<Utc>::MIN_UTC)
        );
        assert!(manager.all_expired().await?.is_empty());
        assert_eq!(manager.all_valid().await?, vec![fresh]);
        assert_eq!(manager.delete_expired_confirmations().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_expired_and_valid_are_complements() -> TestResult {
        let now = Utc::now();
        let old = sent_at(now - Duration::days(EXPIRE_DAYS + 1));
        let fresh = sent_at(now);

        let table = Arc::new(Mutex::new(vec![old.clone(), fresh.clone()]));

        let manager = EmailConfirmationManagerImpl::new(
            Arc::new(table_backed_repo(table)),
            FixedClock(now),
            Duration::days(EXPIRE_DAYS),
        );

        let expired = manager.all_expired().await?;
        let valid = manager.all_valid().await?;

        assert_eq!(expired, vec![old]);
        assert_eq!(valid, vec![fresh]);

        Ok(())
    }

    #[tokio::test]
    async fn test_confirmation_on_threshold_is_valid() -> TestResult {
        let now = Utc::now();
        let boundary = sent_at(now - Duration::days(EXPIRE_DAYS));

        let table = Arc::new(Mutex::new(vec![boundary.clone()]));

        let manager = EmailConfirmationManagerImpl::new(
            Arc::new(table_backed_repo(table)),
            FixedClock(now),
            Duration::days(EXPIRE_DAYS),
        );

        assert!(manager.all_expired().await?.is_empty());
        assert_eq!(manager.all_valid().await?, vec![boundary]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_expired_confirmations_is_idempotent() -> TestResult {
        let now = Utc::now();
        let fresh = sent_at(now - Duration::hours(1));

        let table = Arc::new(Mutex::new(vec![
            sent_at(now - Duration::days(EXPIRE_DAYS + 1)),
            fresh.clone(),
            sent_at(now - Duration::weeks(2)),
        ]));

        let manager = EmailConfirmationManagerImpl::new(
            Arc::new(table_backed_repo(table.clone())),
            FixedClock(now),
            Duration::days(EXPIRE_DAYS),
        );

        assert_eq!(manager.delete_expired_confirmations().await?, 2);
        assert_eq!(*table.lock().unwrap(), vec![fresh]);

        assert_eq!(manager.delete_expired_confirmations().await?, 0);
        assert_eq!(table.lock().unwrap().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_expired_confirmations_propagates_errors() {
        let mut repo = MockEmailConfirmationRepository::new();

        repo.expect_delete_email_confirmations()
            .times(1)
            .returning(|_| {
                Err(DeleteEmailConfirmationsError::UnknownError(anyhow::anyhow!(
                    "connection closed"
                )))
            });

        let manager = EmailConfirmationManagerImpl::new(
            Arc::new(repo),
            FixedClock(Utc::now()),
            Duration::days(EXPIRE_DAYS),
        );

        let result = manager.delete_expired_confirmations().await;

        assert!(matches!(
            result,
            Err(DeleteEmailConfirmationsError::UnknownError(_))
        ));
    }
}
