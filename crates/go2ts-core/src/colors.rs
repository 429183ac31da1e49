//! Terminal styling for emitted TypeScript.
//!
//! Record names, primitive types and the surrounding TypeScript syntax each
//! get one style. The plain palette is all empty strings, so rendering code
//! formats the same way whether or not color is on.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    /// Declared record names.
    pub record: &'static str,
    /// `string`, `number`.
    pub primitive: &'static str,
    /// Keywords, punctuation and the absent-value marker.
    pub syntax: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ANSI: Self = Self {
        record: "\x1b[34m",
        primitive: "\x1b[32m",
        syntax: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        record: "",
        primitive: "",
        syntax: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }
}
