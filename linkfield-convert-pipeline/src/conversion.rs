//! Conversion of legacy link rows into native link values.
use linkfield_convert_shared::types::{LegacyContentRow, LinkConversion, LinkKind, NativeLinkValue};

/// Converts one legacy row into the native link field's value.
///
/// Rows without a type hold no link and yield [`LinkConversion::Empty`]. Rows
/// with an unknown type, or element links missing the linked id or site id,
/// yield [`LinkConversion::Invalid`]. Ids of zero count as missing, the legacy
/// plugin wrote them for cleared selections.
pub fn convert_link(row: &LegacyContentRow) -> LinkConversion {
    let Some(raw_type) = row.link_type.as_deref().filter(|t| !t.is_empty()) else {
        return LinkConversion::Empty;
    };

    let kind = match raw_type.parse::<LinkKind>() {
        Ok(kind) => kind,
        Err(e) => return LinkConversion::Invalid(e.to_string()),
    };

    let linked_url = row.linked_url.as_deref().unwrap_or_default();
    let value = match kind {
        LinkKind::Entry | LinkKind::Asset | LinkKind::Category => {
            let linked_id = row.linked_id.filter(|id| *id != 0);
            let site_id = row.site_id.filter(|id| *id != 0);
            let (Some(linked_id), Some(site_id)) = (linked_id, site_id) else {
                return LinkConversion::Invalid(format!(
                    "{kind} link is missing its linked element or site"
                ));
            };
            Some(reference_token(kind, linked_id, site_id))
        }
        LinkKind::Email => Some(format!("mailto:{linked_url}")),
        LinkKind::Tel => Some(format!("tel:{linked_url}")),
        LinkKind::Url | LinkKind::Custom => row.linked_url.clone(),
    };

    let payload = row.decoded_payload();
    LinkConversion::Converted(NativeLinkValue {
        value,
        link_type: kind.native_type().to_string(),
        label: payload.custom_text,
        target: payload.target,
    })
}

/// Builds the reference token the host resolves to the element's URL at render time.
fn reference_token(kind: LinkKind, linked_id: i64, site_id: i64) -> String {
    format!("{{{kind}:{linked_id}@{site_id}:url}}")
}
