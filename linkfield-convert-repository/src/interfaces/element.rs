//! This module defines the `ElementRepository` trait, the converter's view of
//! the host's element store: element lookup, field layouts, and the per-site
//! JSON content column.
use crate::errors::RepositoryError;
use linkfield_convert_shared::types::{Element, LayoutField};
use serde_json::{Map, Value};

/// A trait that defines the interface for interacting with host elements.
#[async_trait::async_trait]
pub trait ElementRepository: Send + Sync {
    /// Looks up a live element for the given site.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the element does not exist, is soft-deleted, or has no
    /// row for `site_id`.
    async fn find_element(
        &self,
        element_id: i64,
        site_id: i64,
    ) -> Result<Option<Element>, RepositoryError>;

    /// Lists the custom fields of the element's field layout, in layout order.
    ///
    /// Elements without a layout, or whose layout is gone, have no fields.
    async fn layout_fields(&self, element: &Element) -> Result<Vec<LayoutField>, RepositoryError>;

    /// Returns the raw JSON text stored as the element's content for `site_id`.
    async fn content(
        &self,
        element_id: i64,
        site_id: i64,
    ) -> Result<Option<String>, RepositoryError>;

    /// Replaces the element's content for `site_id`.
    async fn save_content(
        &self,
        element_id: i64,
        site_id: i64,
        content: &Map<String, Value>,
    ) -> Result<(), RepositoryError>;
}
