//! Merging converted link values into element content.
//!
//! Element content is a JSON object keyed by layout-element uid. Merges only
//! ever add or replace the keys of the field being migrated; every other key
//! is carried over untouched. Key order holds in the merged map only: the
//! store's JSONB column does not keep it.
use crate::errors::MergeError;
use linkfield_convert_shared::types::{LayoutField, NativeLinkValue};
use serde_json::{Map, Value};

/// Returns the layout-element uids under which the field with `handle` is placed.
///
/// A layout may override a field's handle; placements are matched on the
/// field's own handle so overridden placements are found too.
pub fn layout_uids_for_handle(layout_fields: &[LayoutField], handle: &str) -> Vec<String> {
    layout_fields
        .iter()
        .filter(|field| field.source_handle() == handle)
        .map(|field| field.uid.clone())
        .collect()
}

/// Decodes the stored content column into a JSON object.
///
/// Missing, blank and `null` content decode to an empty object, as does an
/// empty JSON array. Content that was JSON-encoded twice (a JSON string holding
/// an object) is decoded one extra time.
pub fn decode_content(raw: Option<&str>) -> Result<Map<String, Value>, MergeError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(Map::new()),
        Some(raw) => raw,
    };

    let decoded: Value = serde_json::from_str(raw).map_err(MergeError::MalformedContent)?;
    let decoded = match decoded {
        Value::String(inner) if is_json_object_text(&inner) => {
            serde_json::from_str(&inner).map_err(MergeError::MalformedContent)?
        }
        other => other,
    };

    match decoded {
        Value::Object(content) => Ok(content),
        Value::Null => Ok(Map::new()),
        Value::Array(items) if items.is_empty() => Ok(Map::new()),
        Value::Array(_) => Err(MergeError::UnexpectedContent("array")),
        Value::String(_) => Err(MergeError::UnexpectedContent("string")),
        Value::Number(_) => Err(MergeError::UnexpectedContent("number")),
        Value::Bool(_) => Err(MergeError::UnexpectedContent("boolean")),
    }
}

fn is_json_object_text(text: &str) -> bool {
    let text = text.trim();
    text.starts_with('{') && text.ends_with('}')
}

/// Overlays `value` under each of `layout_uids` onto the stored content.
///
/// # Arguments
///
/// * `existing` - Raw content column for the element and site, if any
/// * `layout_uids` - Layout-element uids of the migrated field
/// * `value` - Converted link value
///
/// # Returns
///
/// The merged content object, or a `MergeError` when the stored content cannot
/// be read as an object.
pub fn merge_field_content(
    existing: Option<&str>,
    layout_uids: &[String],
    value: &NativeLinkValue,
) -> Result<Map<String, Value>, MergeError> {
    let mut content = decode_content(existing)?;
    let encoded = serde_json::to_value(value).map_err(MergeError::EncodeValue)?;

    for uid in layout_uids {
        content.insert(uid.clone(), encoded.clone());
    }

    Ok(content)
}
