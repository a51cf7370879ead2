//! Field type identifiers and the native link field's default settings.
use serde::Serialize;

/// Type identifiers the legacy plugin registered its field under. Older
/// installs still carry the pre-rename namespace.
pub const LEGACY_FIELD_TYPES: [&str; 2] = [
    "typedlinkfield\\fields\\LinkField",
    "lenz\\linkfield\\fields\\LinkField",
];

/// Type identifier of the host's native link field.
pub const NATIVE_FIELD_TYPE: &str = "craft\\fields\\Link";

/// Settings blob written for every converted field.
///
/// The defaults enable every native link type with wildcard sources, so no
/// existing legacy value is rejected by the converted field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeLinkSettings {
    pub advanced_fields: Vec<String>,
    pub full_graphql_data: bool,
    pub max_length: u32,
    pub show_label_field: bool,
    pub type_settings: TypeSettings,
    pub types: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeSettings {
    pub entry: SourceSettings,
    pub url: UrlSettings,
    pub asset: AssetSettings,
    pub category: SourceSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourceSettings {
    pub sources: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlSettings {
    pub allow_root_relative_urls: String,
    pub allow_anchors: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSettings {
    pub sources: String,
    pub allowed_kinds: String,
    pub show_unpermitted_volumes: String,
    pub show_unpermitted_files: String,
}

const WILDCARD: &str = "*";
// The host stores lightswitch settings as "1" / "".
const ENABLED: &str = "1";
const DISABLED: &str = "";

impl Default for NativeLinkSettings {
    fn default() -> Self {
        Self {
            advanced_fields: vec!["target".to_string()],
            full_graphql_data: true,
            max_length: 255,
            show_label_field: true,
            type_settings: TypeSettings {
                entry: SourceSettings::wildcard(),
                url: UrlSettings {
                    allow_root_relative_urls: ENABLED.to_string(),
                    allow_anchors: ENABLED.to_string(),
                },
                asset: AssetSettings {
                    sources: WILDCARD.to_string(),
                    allowed_kinds: WILDCARD.to_string(),
                    show_unpermitted_volumes: DISABLED.to_string(),
                    show_unpermitted_files: DISABLED.to_string(),
                },
                category: SourceSettings::wildcard(),
            },
            types: ["entry", "url", "asset", "category", "email", "tel"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SourceSettings {
    fn wildcard() -> Self {
        Self {
            sources: WILDCARD.to_string(),
        }
    }
}

impl NativeLinkSettings {
    /// Encodes the settings as the JSON text stored in the field registry.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
