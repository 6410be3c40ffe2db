//! Domain models, repositories and managers

pub mod accounts;
pub mod clock;
