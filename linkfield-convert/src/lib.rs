//! Linkfield Convert Library
//!
//! This library provides the configuration, dependency wiring and error types
//! for the `linkfield-convert` command.

pub mod config;
pub mod errors;

pub use config::{Config, Dependencies};
pub use errors::{ConfigError, ConvertError};
