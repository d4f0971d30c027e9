//! Go string literal decoding
//!
//! The grammar only checks the shape of a literal, so escape sequences are
//! validated here while decoding.

use std::str::Chars;

/// Decode a raw (`` `...` ``) or interpreted (`"..."`) string literal.
pub fn unquote(literal: &str) -> Result<String, &'static str> {
    if let Some(body) = literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        // carriage returns are discarded from raw strings
        return Ok(body.chars().filter(|&c| c != '\r').collect());
    }

    let body = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or("not a string literal")?;

    let mut bytes = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            escape(&mut chars, &mut bytes)?;
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
    }

    // \x and octal escapes may produce invalid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decode one escape sequence, the backslash already consumed
fn escape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Result<(), &'static str> {
    let ch = chars.next().ok_or("escape sequence not terminated")?;

    let byte = match ch {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        '\\' => b'\\',
        '"' => b'"',
        '0'..='7' => {
            let value = digits(chars, 2, 8, ch.to_digit(8).unwrap_or_default(), "invalid octal escape")?;
            u8::try_from(value).map_err(|_| "octal escape value > 255")?
        }
        'x' => digits(chars, 2, 16, 0, "invalid hex escape")? as u8,
        'u' | 'U' => {
            let count = if ch == 'u' { 4 } else { 8 };
            let value = digits(chars, count, 16, 0, "invalid hex escape")?;
            let decoded = char::from_u32(value).ok_or("escape sequence is invalid Unicode code point")?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
            return Ok(());
        }
        _ => return Err("unknown escape sequence"),
    };

    out.push(byte);
    Ok(())
}

fn digits(
    chars: &mut Chars<'_>,
    count: usize,
    radix: u32,
    mut value: u32,
    error: &'static str,
) -> Result<u32, &'static str> {
    for _ in 0..count {
        let digit = chars.next().and_then(|c| c.to_digit(radix)).ok_or(error)?;
        value = value * radix + digit;
    }
    Ok(value)
}
