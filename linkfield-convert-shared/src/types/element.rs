/// An element as seen through the host's element store for a single site.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: i64,
    pub site_id: i64,
    pub field_layout_id: Option<i64>,
}

/// A custom field placed in a field layout.
///
/// `uid` is the layout element's uid, which is also the key the element content
/// JSON uses for this field. `handle` is the handle in effect inside the layout;
/// `original_handle` is set when the layout overrides the field's own handle.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutField {
    pub uid: String,
    pub handle: String,
    pub original_handle: Option<String>,
}

impl LayoutField {
    /// The field's own handle, ignoring any layout override.
    pub fn source_handle(&self) -> &str {
        self.original_handle.as_deref().unwrap_or(&self.handle)
    }
}
