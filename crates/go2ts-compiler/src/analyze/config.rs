//! Extraction options.

/// Which records are marked as exported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportPolicy {
    /// Every record, regardless of Go visibility.
    #[default]
    All,
    /// Only records whose Go name starts with an uppercase letter.
    SourceVisibility,
    None,
}

impl ExportPolicy {
    pub fn is_exported(self, name: &str) -> bool {
        match self {
            ExportPolicy::All => true,
            ExportPolicy::SourceVisibility => name.chars().next().is_some_and(char::is_uppercase),
            ExportPolicy::None => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExtractConfig {
    /// Struct tag key that carries the serialized field name.
    pub(crate) tag_key: String,
    pub(crate) export: ExportPolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            tag_key: "json".to_string(),
            export: ExportPolicy::default(),
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the struct tag key used for field names.
    pub fn tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Set which records are exported.
    pub fn export(mut self, policy: ExportPolicy) -> Self {
        self.export = policy;
        self
    }
}
