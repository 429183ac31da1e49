//! Struct tag parsing and external field naming.
//!
//! A tag is a space-separated list of `key:"value"` pairs, the layout Go's
//! `reflect.StructTag` reads. A field is named by the part of the value
//! before the first comma; the rest are options and are ignored.

use crate::diagnostics::{ErrorKind, Span};
use crate::parser::Tag;
use crate::parser::escape::unquote;

use super::resolve::ResolveError;

/// How a field appears in the serialized form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagName {
    Name(String),
    /// `json:"-"`: the field is never serialized.
    Skip,
}

/// Split a tag into its `key:"value"` pairs, in order, with values unquoted.
pub fn parse_tag(tag: &str) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::new();
    let mut rest = tag;

    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return Ok(pairs);
        }

        let key_len = rest
            .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\x7f')
            .unwrap_or(rest.len());
        let (key, after_key) = rest.split_at(key_len);
        if key.is_empty() {
            return Err(format!("unexpected `{}` in struct tag", first_char(rest)));
        }
        let Some(after_colon) = after_key.strip_prefix(':') else {
            return Err(format!("expected `:` after tag key `{key}`"));
        };
        let Some(quoted) = after_colon.strip_prefix('"') else {
            return Err(format!("expected quoted value for tag key `{key}`"));
        };

        let Some(end) = closing_quote(quoted) else {
            return Err(format!("unterminated value for tag key `{key}`"));
        };
        let value = unquote(&quoted[..end])
            .map_err(|message| format!("invalid value for tag key `{key}`: {message}"))?;
        pairs.push((key.to_string(), value));
        rest = &quoted[end + 1..];
    }
}

/// Byte offset of the quote closing a value; `body` starts after the
/// opening quote. Escaped characters are skipped, not decoded.
fn closing_quote(body: &str) -> Option<usize> {
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some(i),
            '\\' => {
                chars.next()?;
            }
            _ => {}
        }
    }
    None
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or(' ')
}

/// Derive a field's external name from its tag.
///
/// The tag must hold exactly one pair, keyed by `key`, with a non-empty name.
pub fn external_name(
    tag: Option<&Tag>,
    key: &str,
    field_span: Span,
) -> Result<TagName, ResolveError> {
    let malformed = |message: String, span: Span| {
        ResolveError::new(ErrorKind::MalformedFieldMetadata(message), span)
    };

    let Some(tag) = tag else {
        return Err(malformed("field has no struct tag".to_string(), field_span));
    };

    let pairs = parse_tag(&tag.value).map_err(|message| malformed(message, tag.span))?;

    let (found, value) = match pairs.as_slice() {
        [] => return Err(malformed("struct tag is empty".to_string(), tag.span)),
        [pair] => pair,
        _ => {
            return Err(malformed(
                format!("expected a single `{key}` key, found {} keys", pairs.len()),
                tag.span,
            ));
        }
    };

    if found != key {
        return Err(malformed(
            format!("expected `{key}` key, found `{found}`"),
            tag.span,
        ));
    }

    let name = value.split(',').next().unwrap_or_default();
    match (name, value.as_str()) {
        ("-", "-") => {
            tracing::debug!(tag = %tag.value, "field skipped by tag");
            Ok(TagName::Skip)
        }
        ("", _) => Err(malformed(format!("`{key}` tag has an empty name"), tag.span)),
        (name, _) => Ok(TagName::Name(name.to_string())),
    }
}
