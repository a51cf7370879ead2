/// Context value the host stores for fields that are not scoped to a site group
/// or a nested owner.
pub const GLOBAL_CONTEXT: &str = "global";

/// A row of the host's field registry.
///
/// Fields are identified by `uid` when written back; `id` is the numeric key the
/// legacy content table refers to.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub id: i64,
    pub handle: String,
    pub uid: String,
    pub field_type: String,
    pub settings: Option<String>,
    pub context: String,
}

impl FieldDefinition {
    /// Returns `true` when the field lives in the global context.
    pub fn is_global(&self) -> bool {
        self.context == GLOBAL_CONTEXT
    }
}
