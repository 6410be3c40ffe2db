//! Account configuration

use chrono::Duration;
use clap::Parser;

/// Settings for email addresses and their confirmations
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct AccountConfig {
    /// Days after which an email confirmation expires
    #[arg(long, env = "EMAIL_CONFIRMATION_EXPIRE_DAYS", default_value = "3")]
    pub email_confirmation_expire_days: u32,
}

impl AccountConfig {
    /// How long an email confirmation stays valid after being sent
    pub fn email_confirmation_expiry(&self) -> Duration {
        Duration::days(i64::from(self.email_confirmation_expire_days))
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            email_confirmation_expire_days: 3,
        }
    }
}
