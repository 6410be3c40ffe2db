//! Postgres implementation of the EmailConfirmationRepository trait

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{error::ErrorKind::UniqueViolation, query, query_as, Error::Database, FromRow};
use uuid::Uuid;

use crate::{
    domain::accounts::email_confirmations::{
        errors::{
            CreateEmailConfirmationError, DeleteEmailConfirmationsError,
            ListEmailConfirmationsError,
        },
        ConfirmationFilter, EmailConfirmation, EmailConfirmationRepository, NewEmailConfirmation,
    },
    infrastructure::db::postgres::PostgresDatabase,
};

#[derive(FromRow)]
struct EmailConfirmationRecord {
    id: Uuid,
    email_address_id: Uuid,
    key: String,
    created: DateTime<Utc>,
    sent: DateTime<Utc>,
}

impl From<EmailConfirmationRecord> for EmailConfirmation {
    fn from(record: EmailConfirmationRecord) -> Self {
        EmailConfirmation {
            id: record.id,
            email_address_id: record.email_address_id,
            key: record.key,
            created: record.created,
            sent: record.sent,
        }
    }
}

/// SQL condition for `filter`, with its single bind parameter
fn condition(filter: &ConfirmationFilter) -> (&'static str, DateTime<Utc>) {
    match filter {
        ConfirmationFilter::SentBefore(threshold) => ("sent < $1", *threshold),
    }
}

impl PostgresDatabase {
    async fn select_email_confirmations(
        &self,
        where_clause: &str,
        value: DateTime<Utc>,
    ) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError> {
        let sql = format!(
            r#"
            SELECT id, email_address_id, "key", created, sent
            FROM email_confirmations
            WHERE {where_clause}
            ORDER BY sent
            "#
        );

        let records = query_as::<_, EmailConfirmationRecord>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| anyhow!("Unknown database error: {:?}", err))?;

        Ok(records.into_iter().map(EmailConfirmation::from).collect())
    }
}

#[async_trait]
impl EmailConfirmationRepository for PostgresDatabase {
    #[mutants::skip]
    async fn create_email_confirmation(
        &self,
        confirmation: &NewEmailConfirmation,
    ) -> Result<EmailConfirmation, CreateEmailConfirmationError> {
        let record = query_as::<_, EmailConfirmationRecord>(
            r#"
            INSERT INTO email_confirmations (id, email_address_id, "key", created, sent)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, email_address_id, "key", created, sent
            "#,
        )
        .bind(confirmation.id)
        .bind(confirmation.email_address_id)
        .bind(confirmation.key.as_str())
        .bind(confirmation.sent)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            Database(db_err) => match db_err.kind() {
                UniqueViolation => CreateEmailConfirmationError::DuplicateKey,
                _ => CreateEmailConfirmationError::UnknownError(anyhow!(
                    "Unknown database error: {:?}",
                    db_err
                )),
            },
            _ => CreateEmailConfirmationError::UnknownError(anyhow!(
                "Unknown database error: {:?}",
                err
            )),
        })?;

        Ok(record.into())
    }

    #[mutants::skip]
    async fn filter_email_confirmations(
        &self,
        filter: &ConfirmationFilter,
    ) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError> {
        let (condition, value) = condition(filter);

        self.select_email_confirmations(condition, value).await
    }

    #[mutants::skip]
    async fn exclude_email_confirmations(
        &self,
        filter: &ConfirmationFilter,
    ) -> Result<Vec<EmailConfirmation>, ListEmailConfirmationsError> {
        let (condition, value) = condition(filter);

        self.select_email_confirmations(&format!("NOT ({condition})"), value)
            .await
    }

    #[mutants::skip]
    async fn delete_email_confirmations(
        &self,
        filter: &ConfirmationFilter,
    ) -> Result<u64, DeleteEmailConfirmationsError> {
        let (condition, value) = condition(filter);
        let sql = format!("DELETE FROM email_confirmations WHERE {condition}");

        let result = query(&sql)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|err| anyhow!("Unknown database error: {:?}", err))?;

        Ok(result.rows_affected())
    }
}
