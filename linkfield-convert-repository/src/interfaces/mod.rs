//! This module defines and re-exports the repository interfaces.
//! The converter passes only depend on these traits, never on a concrete store.
mod element;
mod field;
mod legacy_link;

pub use element::ElementRepository;
pub use field::FieldRepository;
pub use legacy_link::LegacyLinkRepository;
