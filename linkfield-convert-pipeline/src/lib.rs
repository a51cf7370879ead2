//! # Linkfield Convert Pipeline
//! The two passes of the link field conversion and the pure functions they are
//! built on.
//!
//! - [`schema::SchemaRewriter`] rewrites legacy link field definitions to the
//!   native link field type with permissive default settings.
//! - [`content::ContentMapper`] converts legacy link rows and merges them into
//!   each element's JSON content.
//! - [`conversion::convert_link`] and [`merge::merge_field_content`] hold the
//!   data mapping itself and touch no store.
pub mod content;
pub mod conversion;
pub mod errors;
pub mod merge;
pub mod schema;

pub use content::{ContentMapper, ContentReport};
pub use errors::{ContentError, MergeError, SchemaError};
pub use schema::{SchemaReport, SchemaRewriter};
