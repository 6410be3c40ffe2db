//! Email addresses module.

mod email;
mod email_address;
mod manager;
mod repository;
mod sender;

pub mod errors;

pub use email::{Email, EmailError};
pub use email_address::{
    AddEmailOptions, AddedEmail, EmailAddress, EmailAddressFields, NewEmailAddress,
};
pub use manager::{EmailAddressManager, EmailAddressManagerImpl};
pub use repository::EmailAddressRepository;
pub use sender::ConfirmationSender;
