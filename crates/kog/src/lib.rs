//! kog CLI library
//!
//! Exposes the CLI's commands, configuration and logging setup for testing.

pub mod commands;
pub mod config;
pub mod logging;

pub use config::KogConfig;
