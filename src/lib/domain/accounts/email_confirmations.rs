//! Email confirmations module.

mod email_confirmation;
mod manager;
mod repository;
mod sender;

pub mod errors;

pub use email_confirmation::{ConfirmationFilter, EmailConfirmation, NewEmailConfirmation};
pub use manager::{EmailConfirmationManager, EmailConfirmationManagerImpl};
pub use repository::EmailConfirmationRepository;
pub use sender::{confirmation_link, TokenConfirmationSender};
