//! User accounts: email addresses and their confirmations.

pub mod email_addresses;
pub mod email_confirmations;
pub mod users;
