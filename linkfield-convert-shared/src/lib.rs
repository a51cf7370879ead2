//! # Linkfield Convert Shared
//! This crate defines the data structures shared across the link field converter:
//! field definitions, legacy link rows, link kinds, native link values, element
//! and layout views, and the native field's default settings.
pub mod settings;
pub mod types;
