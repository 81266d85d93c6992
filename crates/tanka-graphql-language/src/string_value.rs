//! Decoding of string token values into owned strings.
//!
//! The lexer hands out string contents exactly as written between the
//! quotes. [`cook_string()`] resolves escape sequences of single-line strings
//! and [`cook_block_string()`] applies the block-string indentation rules.

use crate::GraphQLStringParsingError;

/// Decodes the raw content of a single-line `"..."` string.
///
/// Supports `\n`, `\r`, `\t`, `\\`, `\"`, `\/`, `\b`, `\f`, `\uXXXX` (fixed
/// 4-digit, including surrogate pairs), and `\u{X...}` (variable length).
///
/// ```rust
/// use tanka_graphql_language::string_value::cook_string;
///
/// assert_eq!(cook_string(br#"a\"b"#).unwrap(), "a\"b");
/// ```
pub fn cook_string(raw: &[u8]) -> Result<String, GraphQLStringParsingError> {
    let content = as_utf8(raw)?;
    if !content.contains('\\') {
        return Ok(content.to_string());
    }

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
            Some('u') => result.push(parse_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            }
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            }
        }
    }

    Ok(result)
}

/// Parses the hex digits of a unicode escape after `\u` has been consumed.
fn parse_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, GraphQLStringParsingError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                }
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                }
            }
        }
        return u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"))
            });
    }

    let lead = read_fixed_hex(chars)?;
    if !(0xD800..=0xDBFF).contains(&lead) {
        return char::from_u32(lead).ok_or_else(|| {
            GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{lead:04X}"))
        });
    }

    // A leading surrogate must be followed by an escaped trailing surrogate.
    let invalid = || GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{lead:04X}"));
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(invalid());
    }
    let trail = read_fixed_hex(chars)?;
    if !(0xDC00..=0xDFFF).contains(&trail) {
        return Err(invalid());
    }
    let code_point = 0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
    char::from_u32(code_point).ok_or_else(invalid)
}

fn read_fixed_hex(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            }
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            }
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Decodes the raw content of a `"""..."""` block string.
///
/// `\"""` becomes `"""`, the common indentation of every line after the
/// first is removed, and leading and trailing blank lines are dropped. Lines
/// may end with `\n`, `\r\n` or `\r`; the result always uses `\n`.
///
/// ```rust
/// use tanka_graphql_language::string_value::cook_block_string;
///
/// let raw = b"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ";
/// assert_eq!(
///     cook_block_string(raw).unwrap(),
///     "Hello,\n  World!\n\nYours,\n  GraphQL.",
/// );
/// ```
pub fn cook_block_string(raw: &[u8]) -> Result<String, GraphQLStringParsingError> {
    let content = as_utf8(raw)?.replace("\\\"\"\"", "\"\"\"");
    let lines = split_lines(&content);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let mut cooked: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 || common_indent == 0 {
                *line
            } else {
                &line[common_indent.min(leading_whitespace(line))..]
            }
        })
        .collect();

    while cooked.first().is_some_and(|line| is_blank(line)) {
        cooked.remove(0);
    }
    while cooked.last().is_some_and(|line| is_blank(line)) {
        cooked.pop();
    }

    Ok(cooked.join("\n"))
}

fn as_utf8(raw: &[u8]) -> Result<&str, GraphQLStringParsingError> {
    std::str::from_utf8(raw)
        .map_err(|err| GraphQLStringParsingError::InvalidUtf8(err.valid_up_to()))
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&content[line_start..index]);
                line_start = index + 1;
            }
            b'\r' => {
                lines.push(&content[line_start..index]);
                if bytes.get(index + 1) == Some(&b'\n') {
                    index += 1;
                }
                line_start = index + 1;
            }
            _ => {}
        }
        index += 1;
    }
    lines.push(&content[line_start..]);
    lines
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|byte| matches!(byte, b' ' | b'\t')).count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}
