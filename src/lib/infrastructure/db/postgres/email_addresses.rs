//! Postgres implementation of the EmailAddressRepository trait

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{
    error::ErrorKind::UniqueViolation,
    query_as, FromRow,
    Error::{Database, RowNotFound},
};
use uuid::Uuid;

use crate::{
    domain::accounts::email_addresses::{
        errors::{
            CreateEmailAddressError, GetEmailAddressError, GetPrimaryEmailAddressError,
            ListEmailAddressesError,
        },
        Email, EmailAddress, EmailAddressRepository, NewEmailAddress,
    },
    infrastructure::db::postgres::PostgresDatabase,
};

#[derive(FromRow)]
struct EmailAddressRecord {
    id: Uuid,
    user_id: Uuid,
    email: String,
    verified: bool,
    primary: bool,
}

impl From<EmailAddressRecord> for EmailAddress {
    fn from(record: EmailAddressRecord) -> Self {
        EmailAddress {
            id: record.id,
            user_id: record.user_id,
            email: Email::new_unchecked(record.email.as_ref()),
            verified: record.verified,
            primary: record.primary,
        }
    }
}

#[async_trait]
impl EmailAddressRepository for PostgresDatabase {
    #[mutants::skip]
    async fn create_email_address(
        &self,
        new_email_address: &NewEmailAddress,
    ) -> Result<EmailAddress, CreateEmailAddressError> {
        let record = query_as::<_, EmailAddressRecord>(
            r#"
            INSERT INTO email_addresses (id, user_id, email, verified, "primary")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, email, verified, "primary"
            "#,
        )
        .bind(*new_email_address.id())
        .bind(*new_email_address.user_id())
        .bind(new_email_address.email().to_string())
        .bind(new_email_address.verified())
        .bind(new_email_address.primary())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            Database(db_err) => match db_err.kind() {
                UniqueViolation => CreateEmailAddressError::DuplicateEmailAddress {
                    email: new_email_address.email().clone(),
                },
                _ => CreateEmailAddressError::UnknownError(anyhow!(
                    "Unknown database error: {:?}",
                    db_err
                )),
            },
            _ => CreateEmailAddressError::UnknownError(anyhow!("Unknown database error: {:?}", err)),
        })?;

        Ok(record.into())
    }

    #[mutants::skip]
    async fn get_primary_email_address(
        &self,
        user_id: &Uuid,
    ) -> Result<EmailAddress, GetPrimaryEmailAddressError> {
        Ok(query_as::<_, EmailAddressRecord>(
            r#"
            SELECT id, user_id, email, verified, "primary"
            FROM email_addresses
            WHERE user_id = $1 AND "primary" = TRUE
            "#,
        )
        .bind(*user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            RowNotFound => GetPrimaryEmailAddressError::NoPrimaryEmailAddress(*user_id),
            _ => GetPrimaryEmailAddressError::UnknownError(anyhow!(
                "Unknown database error: {:?}",
                err
            )),
        })?
        .into())
    }

    #[mutants::skip]
    async fn list_verified_email_addresses(
        &self,
        email: &Email,
    ) -> Result<Vec<EmailAddress>, ListEmailAddressesError> {
        let records = query_as::<_, EmailAddressRecord>(
            r#"
            SELECT id, user_id, email, verified, "primary"
            FROM email_addresses
            WHERE verified = TRUE AND email = $1
            ORDER BY id
            "#,
        )
        .bind(email.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|err| anyhow!("Unknown database error: {:?}", err))?;

        Ok(records.into_iter().map(EmailAddress::from).collect())
    }

    #[mutants::skip]
    async fn get_email_address_for_user(
        &self,
        user_id: &Uuid,
        email: &Email,
    ) -> Result<EmailAddress, GetEmailAddressError> {
        Ok(query_as::<_, EmailAddressRecord>(
            r#"
            SELECT id, user_id, email, verified, "primary"
            FROM email_addresses
            WHERE user_id = $1 AND LOWER(email) = LOWER($2)
            "#,
        )
        .bind(*user_id)
        .bind(email.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            RowNotFound => GetEmailAddressError::EmailAddressNotFound {
                user_id: *user_id,
                email: email.clone(),
            },
            _ => GetEmailAddressError::UnknownError(anyhow!("Unknown database error: {:?}", err)),
        })?
        .into())
    }
}
