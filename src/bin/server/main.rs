#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API for managing account email addresses

use std::sync::Arc;

use account_emails::{
    domain::{
        accounts::{
            email_addresses::EmailAddressManagerImpl,
            email_confirmations::{EmailConfirmationManagerImpl, TokenConfirmationSender},
        },
        clock::SystemClock,
    },
    infrastructure::{
        config::AccountConfig,
        db::postgres::{DatabaseConnectionDetails, PostgresDatabase},
        http::{
            state::{AppConfig, AppState},
            HttpServer, HttpServerConfig,
        },
    },
};
use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

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
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Failed to load environment: {}", e);
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let postgres = Arc::new(PostgresDatabase::new(&args.db.connection_string).await?);

    let sender = Arc::new(TokenConfirmationSender::new(postgres.clone(), SystemClock));

    let state = AppState::new(
        AppConfig {
            base_url: args.server.base_url.clone(),
        },
        EmailAddressManagerImpl::new(postgres.clone(), sender),
        EmailConfirmationManagerImpl::new(
            postgres,
            SystemClock,
            args.accounts.email_confirmation_expiry(),
        ),
    );

    info!(
        expire_days = args.accounts.email_confirmation_expire_days,
        "starting server on port {}", args.server.http_port
    );

    HttpServer::new(state, &args.server).await?.run().await
}
