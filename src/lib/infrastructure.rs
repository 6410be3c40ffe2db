//! Adapters: configuration, persistence and the HTTP API

pub mod config;
pub mod db;
pub mod http;
