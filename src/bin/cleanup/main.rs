#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Deletes expired email confirmations, for running from cron

use std::sync::Arc;

use account_emails::{
    domain::{
        accounts::email_confirmations::{EmailConfirmationManager, EmailConfirmationManagerImpl},
        clock::SystemClock,
    },
    infrastructure::{
        config::AccountConfig,
        db::postgres::{DatabaseConnectionDetails, PostgresDatabase},
    },
};
use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The database connection details
    #[clap(flatten)]
    pub db: DatabaseConnectionDetails,

    /// Email address and confirmation settings
    #[clap(flatten)]
    pub accounts: AccountConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let postgres = Arc::new(PostgresDatabase::new(&args.db.connection_string).await?);

    let confirmations = EmailConfirmationManagerImpl::new(
        postgres,
        SystemClock,
        args.accounts.email_confirmation_expiry(),
    );

    let deleted = confirmations.delete_expired_confirmations().await?;

    info!("removed {deleted} expired email confirmations");

    Ok(())
}
