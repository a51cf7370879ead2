//! Configuration module for linkfield-convert.
//! Reads settings from the environment and wires up the repositories.
mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::Config;
