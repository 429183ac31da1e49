//! Property name spelling.
//!
//! Tag names are arbitrary strings; anything that is not a plain identifier
//! is written as a string literal key.

use std::borrow::Cow;

/// `name` as a TypeScript property key, quoted when it is not an identifier.
pub fn property_name(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        return Cow::Borrowed(name);
    }

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let starts = first.is_alphabetic() || first == '_' || first == '$';
    starts && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
