//! Decoding of backslash escapes in `--map` keys and values.
//!
//! Accepts `\uXXXX`, `\UXXXXXXXX`, `\xXX`, octal `\o`..`\ooo`, the usual
//! single-character escapes and backslash-newline. Unknown escapes are kept
//! verbatim.

use crate::error::CoreError;

/// Decode every escape sequence in `input`.
///
/// # Errors
/// Returns [`CoreError::InvalidEscape`] on a truncated hex escape, a code
/// point that is not a Unicode scalar value, or a trailing lone backslash.
///
/// # Example
/// ```
/// use pf_core::escape::decode_escapes;
/// assert_eq!(decode_escapes(r"\u2014").unwrap(), "\u{2014}");
/// assert_eq!(decode_escapes(r"a\tb").unwrap(), "a\tb");
/// ```
pub fn decode_escapes(input: &str) -> Result<String, CoreError> {
    if !input.contains('\\') {
        return Ok(input.to_owned());
    }

    let fail = |offset: usize, reason: &'static str| CoreError::InvalidEscape {
        input: input.to_owned(),
        offset,
        reason,
    };

    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, esc)) = chars.next() else {
            return Err(fail(offset, "trailing backslash"));
        };
        match esc {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0B}'),
            'x' | 'u' | 'U' => {
                let width = match esc {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let mut value: u32 = 0;
                for _ in 0..width {
                    let digit = chars
                        .next()
                        .and_then(|(_, d)| d.to_digit(16))
                        .ok_or_else(|| fail(offset, "truncated hex escape"))?;
                    value = value * 16 + digit;
                }
                let decoded = char::from_u32(value)
                    .ok_or_else(|| fail(offset, "not a unicode scalar value"))?;
                out.push(decoded);
            }
            '0'..='7' => {
                let mut value = esc.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match chars.peek().and_then(|&(_, d)| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                // Three octal digits top out at 0o777, always a valid scalar.
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    Ok(out)
}
