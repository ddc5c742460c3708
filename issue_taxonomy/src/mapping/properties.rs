//! `.properties` text reader
//!
//! Supports `key=value`, `key:value` and `key value` entries, `#` and `!`
//! comment lines, backslash line continuations and the usual escapes
//! including `\uXXXX`. Keys and values are trimmed.

use super::error::{MappingError, MappingResult};
use super::table::TableKind;

/// Parse a properties document into `(key, value)` pairs in document order.
/// Duplicate keys are left for the table builder to reject.
pub fn parse_properties(kind: TableKind, text: &str) -> MappingResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let line_number = index + 1;
        let mut logical = line.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let malformed =
            |reason: String| MappingError::malformed(kind, format!("line {}: {}", line_number, reason));

        let key = unescape(key).map_err(&malformed)?;
        let value = unescape(value).map_err(&malformed)?;
        pairs.push((key, value));
    }

    Ok(pairs)
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
        rest = stripped.trim_start();
    }
    (key, rest.trim_end())
}

fn unescape(text: &str) -> Result<String, String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.chars().count() != 4 {
                    return Err(format!("truncated unicode escape '\\u{}'", hex));
                }
                let code = u32::from_str_radix(&hex, 16)
                    .map_err(|_| format!("invalid unicode escape '\\u{}'", hex))?;
                let ch = char::from_u32(code)
                    .ok_or_else(|| format!("invalid code point U+{:04X}", code))?;
                out.push(ch);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn parse(text: &str) -> Vec<(String, String)> {
        parse_properties(TableKind::Http, text).unwrap()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_separators_and_comments() {
        let pairs = parse(
            "# HTTP codes\n\
             ! legacy comment\n\
             \n\
             400=VALIDATION_ISSUE\n\
             404 : NOT_FOUND_ISSUE\n\
             \t500   CODE_ISSUE   \n",
        );

        assert_eq!(
            pairs,
            vec![
                pair("400", "VALIDATION_ISSUE"),
                pair("404", "NOT_FOUND_ISSUE"),
                pair("500", "CODE_ISSUE"),
            ]
        );
    }

    #[test]
    fn test_dotted_keys_and_escapes() {
        let pairs = parse(
            "java.lang.IllegalArgumentException=VALIDATION_ISSUE\n\
             weird\\:key = CODE\\u005FISSUE\n",
        );

        assert_eq!(pairs[0], pair("java.lang.IllegalArgumentException", "VALIDATION_ISSUE"));
        assert_eq!(pairs[1], pair("weird:key", "CODE_ISSUE"));
    }

    #[test]
    fn test_line_continuation() {
        let pairs = parse("503 = SERVICE_\\\n      UNAVAILABLE_ISSUE\n");
        assert_eq!(pairs, vec![pair("503", "SERVICE_UNAVAILABLE_ISSUE")]);
    }

    #[test]
    fn test_key_without_value() {
        assert_eq!(parse("418\n"), vec![pair("418", "")]);
    }

    #[test]
    fn test_bad_unicode_escape() {
        let result = parse_properties(TableKind::Exception, "a=\\u12\n");
        assert_matches!(
            result,
            Err(MappingError::Malformed { kind: TableKind::Exception, reason }) if reason.starts_with("line 1")
        );
    }
}
