use serde_json::{Map, Value};

/// A row of the legacy plugin's link content table.
///
/// Every link attribute is optional because the legacy plugin stored empty links
/// as rows without a type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyContentRow {
    pub field_id: i64,
    pub element_id: i64,
    pub site_id: Option<i64>,
    pub link_type: Option<String>,
    pub linked_id: Option<i64>,
    pub linked_url: Option<String>,
    pub payload: Option<String>,
}

/// The advanced options the legacy plugin kept in the `payload` JSON column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyPayload {
    pub custom_text: Option<String>,
    pub target: Option<String>,
}

impl LegacyContentRow {
    /// Decodes the payload column.
    ///
    /// A missing payload, or one that is not a JSON object, yields an empty
    /// payload. Members are read independently: a member of an unusable type
    /// is dropped without affecting the other. Numbers are kept as their text.
    pub fn decoded_payload(&self) -> LegacyPayload {
        let Some(Value::Object(members)) = self
            .payload
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        else {
            return LegacyPayload::default();
        };

        LegacyPayload {
            custom_text: text_member(&members, "customText"),
            target: text_member(&members, "target"),
        }
    }
}

fn text_member(members: &Map<String, Value>, key: &str) -> Option<String> {
    match members.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
