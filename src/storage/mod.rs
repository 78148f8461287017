//! Storage module for configuration persistence.

pub mod config;

pub use config::{ConfigError, SyncConfig};
