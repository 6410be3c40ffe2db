//! Database adapters

pub mod postgres;
