//! Configuration types for TypeScript emission.

use go2ts_core::Colors;

/// How a nullable (pointer) field spells the absent value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NullType {
    /// `null` - what `encoding/json` writes for a nil pointer
    #[default]
    Null,
    /// `undefined`
    Undefined,
}

impl NullType {
    pub fn as_str(self) -> &'static str {
        match self {
            NullType::Null => "null",
            NullType::Undefined => "undefined",
        }
    }
}

/// Declaration form used for each record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeclStyle {
    /// `type Name = { ... };`
    #[default]
    TypeAlias,
    /// `interface Name { ... }`
    Interface,
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether exported records get the `export` keyword
    pub(crate) export: bool,
    pub(crate) null_type: NullType,
    pub(crate) style: DeclStyle,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            null_type: NullType::default(),
            style: DeclStyle::default(),
            colors: Colors::PLAIN,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to honor each record's `exported` flag.
    ///
    /// When disabled, no declaration is exported.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set the absent-value marker for nullable fields.
    pub fn null_type(mut self, value: NullType) -> Self {
        self.null_type = value;
        self
    }

    /// Set the declaration form.
    pub fn style(mut self, value: DeclStyle) -> Self {
        self.style = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
