//! Go string literal escapes.
//!
//! Decodes the body of a double-quoted literal with the same rules as Go's
//! `strconv.Unquote`: `\x` and octal escapes produce raw bytes, `\u` and `\U`
//! produce code points, and the decoded bytes must form valid UTF-8.

use std::str::Chars;

/// Decode the body of a `"..."` literal, delimiters already removed.
pub(crate) fn unquote(body: &str) -> Result<String, String> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => decode_escape(&mut chars, &mut out)?,
            '\n' => return Err("newline in quoted value".to_string()),
            '"' => return Err("unescaped `\"` in quoted value".to_string()),
            c => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).map_err(|_| "escapes do not form valid UTF-8".to_string())
}

fn decode_escape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Result<(), String> {
    let Some(c) = chars.next() else {
        return Err("trailing `\\` in quoted value".to_string());
    };

    let simple = match c {
        'a' => Some(0x07),
        'b' => Some(0x08),
        'f' => Some(0x0c),
        'n' => Some(b'\n'),
        'r' => Some(b'\r'),
        't' => Some(b'\t'),
        'v' => Some(0x0b),
        '\\' => Some(b'\\'),
        '"' => Some(b'"'),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return Ok(());
    }

    match c {
        'x' => out.push(digits(chars, 2, 16, c)? as u8),
        '0'..='7' => {
            let rest = digits(chars, 2, 8, c)?;
            let value = (c as u32 - '0' as u32) * 64 + rest;
            let byte = u8::try_from(value)
                .map_err(|_| format!("octal escape `\\{c}..` exceeds 255"))?;
            out.push(byte);
        }
        'u' | 'U' => {
            let width = if c == 'u' { 4 } else { 8 };
            let value = digits(chars, width, 16, c)?;
            let decoded = char::from_u32(value)
                .ok_or_else(|| format!("escape `\\{c}{value:x}` is not a valid code point"))?;
            push_char(out, decoded);
        }
        other => return Err(format!("unknown escape `\\{other}`")),
    }
    Ok(())
}

/// Read exactly `count` digits in `radix`.
fn digits(
    chars: &mut Chars<'_>,
    count: usize,
    radix: u32,
    escape: char,
) -> Result<u32, String> {
    let mut value = 0;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|d| d.to_digit(radix))
            .ok_or_else(|| format!("incomplete `\\{escape}` escape"))?;
        value = value * radix + digit;
    }
    Ok(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
