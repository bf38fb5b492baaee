//! Cooking of raw string-literal text into string values.

use crate::GraphQLStringParsingError;
use std::iter::Peekable;
use std::str::Chars;

/// Cooks a raw string literal (quotes included) into its value.
pub fn cook_string_literal(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if let Some(rest) = raw.strip_prefix("\"\"\"") {
        let content = rest
            .strip_suffix("\"\"\"")
            .ok_or(GraphQLStringParsingError::UnterminatedString)?;
        Ok(block_string_value(&content.replace("\\\"\"\"", "\"\"\"")))
    } else {
        cook_quoted_string(raw)
    }
}

fn cook_quoted_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }
    Ok(result)
}

/// Reads the code unit(s) after `\u`, joining a UTF-16 surrogate pair such
/// as `\uD83D\uDE00` into one character.
fn cook_unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Result<char, GraphQLStringParsingError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() && hex.len() < 6 => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                },
            }
        }
        let invalid = || GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"));
        let code_point = u32::from_str_radix(&hex, 16).map_err(|_| invalid())?;
        return char::from_u32(code_point).ok_or_else(invalid);
    }

    let lead = read_fixed_hex(chars)?;
    match lead {
        0xD800..=0xDBFF => {
            let mut lookahead = chars.clone();
            let is_escape_pair =
                lookahead.next() == Some('\\') && lookahead.next() == Some('u');
            if !is_escape_pair {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{lead:04X}"
                )));
            }
            chars.next();
            chars.next();
            let trail = read_fixed_hex(chars)?;
            if !(0xDC00..=0xDFFF).contains(&trail) {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{lead:04X}\\u{trail:04X}"
                )));
            }
            let code_point = 0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
            char::from_u32(code_point).ok_or_else(|| {
                GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{lead:04X}\\u{trail:04X}"
                ))
            })
        },
        0xDC00..=0xDFFF => Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
            "\\u{lead:04X}"
        ))),
        _ => char::from_u32(lead).ok_or_else(|| {
            GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{lead:04X}"))
        }),
    }
}

fn read_fixed_hex(chars: &mut Peekable<Chars<'_>>) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// The `BlockStringValue(rawValue)` algorithm.
///
/// Common indentation is measured over every line but the first, ignoring
/// lines made only of spaces and tabs; it is then removed from those lines.
/// Leading and trailing whitespace-only lines are dropped and the rest are
/// joined with `\n`.
pub fn block_string_value(raw: &str) -> String {
    let lines = split_lines(raw);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| match common_indent {
            Some(indent) if idx > 0 => line.get(indent..).unwrap_or(""),
            _ => line,
        })
        .collect();

    while lines.first().is_some_and(|l| is_whitespace_only(l)) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| is_whitespace_only(l)) {
        lines.pop();
    }

    lines.join("\n")
}

/// Splits on `\r\n`, `\n` and a lone `\r`.
fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = raw.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                lines.push(&raw[start..idx]);
                start = idx + 1;
            },
            b'\r' => {
                lines.push(&raw[start..idx]);
                if bytes.get(idx + 1) == Some(&b'\n') {
                    idx += 1;
                }
                start = idx + 1;
            },
            _ => (),
        }
        idx += 1;
    }
    lines.push(&raw[start..]);
    lines
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_whitespace_only(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}
