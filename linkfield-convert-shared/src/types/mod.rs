mod element;
mod field_definition;
mod legacy_content_row;
mod link_kind;
mod native_link_value;

pub use element::{Element, LayoutField};
pub use field_definition::{FieldDefinition, GLOBAL_CONTEXT};
pub use legacy_content_row::{LegacyContentRow, LegacyPayload};
pub use link_kind::{LinkKind, UnknownLinkKind};
pub use native_link_value::{LinkConversion, NativeLinkValue};
