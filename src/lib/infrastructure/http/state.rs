//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::accounts::{
    email_addresses::EmailAddressManager, email_confirmations::EmailConfirmationManager,
};

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// The base URL of the application
    pub base_url: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<E: EmailAddressManager, C: EmailConfirmationManager> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// The application configuration
    pub config: AppConfig,

    /// Email address manager
    pub email_addresses: Arc<E>,

    /// Email confirmation manager
    pub email_confirmations: Arc<C>,
}

impl<E, C> AppState<E, C>
where
    E: EmailAddressManager,
    C: EmailConfirmationManager,
{
    /// Create a new application state
    pub fn new(config: AppConfig, email_addresses: E, email_confirmations: C) -> Self {
        Self {
            start_time: Utc::now(),
            config,
            email_addresses: Arc::new(email_addresses),
            email_confirmations: Arc::new(email_confirmations),
        }
    }
}

impl<E, C> fmt::Debug for AppState<E, C>
where
    E: EmailAddressManager,
    C: EmailConfirmationManager,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("config", &self.config)
            .field("email_addresses", &"EmailAddressManager")
            .field("email_confirmations", &"EmailConfirmationManager")
            .finish()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use crate::domain::accounts::{
        email_addresses::tests::MockEmailAddressManager,
        email_confirmations::tests::MockEmailConfirmationManager,
    };

    pub fn test_state(
        email_addresses: Option<MockEmailAddressManager>,
        email_confirmations: Option<MockEmailConfirmationManager>,
    ) -> AppState<MockEmailAddressManager, MockEmailConfirmationManager> {
        let config = AppConfig {
            base_url: "https://example.com".to_string(),
        };

        AppState::new(
            config,
            email_addresses.unwrap_or_default(),
            email_confirmations.unwrap_or_default(),
        )
    }
}
