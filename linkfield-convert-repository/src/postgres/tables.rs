use crate::errors::RepositoryError;

/// Quoted, prefixed names of the host tables.
///
/// The host lets installs put a prefix in front of every table name. The prefix
/// is restricted to ASCII letters, digits and underscores because it is spliced
/// into SQL text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableNames {
    prefix: String,
}

impl TableNames {
    pub fn new(prefix: impl Into<String>) -> Result<Self, RepositoryError> {
        let prefix = prefix.into();
        if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(RepositoryError::InvalidTablePrefix(prefix));
        }
        Ok(Self { prefix })
    }

    fn quoted(&self, table: &str) -> String {
        format!("\"{}{}\"", self.prefix, table)
    }

    pub fn fields(&self) -> String {
        self.quoted("fields")
    }

    pub fn legacy_links(&self) -> String {
        self.quoted("lenz_linkfield")
    }

    pub fn elements(&self) -> String {
        self.quoted("elements")
    }

    pub fn elements_sites(&self) -> String {
        self.quoted("elements_sites")
    }

    pub fn field_layouts(&self) -> String {
        self.quoted("fieldlayouts")
    }
}
