mod content;
mod merge;
mod schema;

pub use content::ContentError;
pub use merge::MergeError;
pub use schema::SchemaError;
