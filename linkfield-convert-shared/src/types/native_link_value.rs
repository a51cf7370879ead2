use serde::Serialize;

/// The value shape the native link field stores per layout element.
///
/// All four keys are always serialized; absent members become JSON `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NativeLinkValue {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub link_type: String,
    pub label: Option<String>,
    pub target: Option<String>,
}

/// Outcome of converting one legacy row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkConversion {
    /// The row holds no link at all; there is nothing to migrate.
    Empty,
    /// The row holds a link that cannot be expressed natively.
    Invalid(String),
    Converted(NativeLinkValue),
}
