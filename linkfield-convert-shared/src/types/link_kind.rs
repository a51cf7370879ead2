use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The link kinds the legacy plugin could store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Asset,
    Category,
    Email,
    Entry,
    Url,
    Tel,
    Custom,
}

/// Returned when a stored link type is not one of the supported kinds.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported link type `{0}`")]
pub struct UnknownLinkKind(pub String);

impl LinkKind {
    pub const ALL: [LinkKind; 7] = [
        LinkKind::Asset,
        LinkKind::Category,
        LinkKind::Email,
        LinkKind::Entry,
        LinkKind::Url,
        LinkKind::Tel,
        LinkKind::Custom,
    ];

    /// The identifier used in the legacy table.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Asset => "asset",
            LinkKind::Category => "category",
            LinkKind::Email => "email",
            LinkKind::Entry => "entry",
            LinkKind::Url => "url",
            LinkKind::Tel => "tel",
            LinkKind::Custom => "custom",
        }
    }

    /// The type the native link field stores for this kind.
    ///
    /// Custom links have no native counterpart and become plain URLs.
    pub fn native_type(&self) -> &'static str {
        match self {
            LinkKind::Custom => LinkKind::Url.as_str(),
            other => other.as_str(),
        }
    }
}

impl FromStr for LinkKind {
    type Err = UnknownLinkKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownLinkKind(s.to_string()))
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_kind() {
        for kind in LinkKind::ALL {
            assert_eq!(kind.as_str().parse::<LinkKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Entry".parse::<LinkKind>(),
            Err(UnknownLinkKind("Entry".to_string()))
        );
        assert!("user".parse::<LinkKind>().is_err());
    }

    #[test]
    fn test_custom_maps_to_url() {
        assert_eq!(LinkKind::Custom.native_type(), "url");
        assert_eq!(LinkKind::Tel.native_type(), "tel");
    }
}
