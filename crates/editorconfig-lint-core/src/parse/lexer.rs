//! Lexer and token parsers for `.editorconfig` files.
//!
//! This module contains nom-based parsers for individual line forms:
//! comments, section headers, and `key = value` properties.

use nom::{
    IResult, Parser,
    bytes::complete::take_while,
    character::complete::{char, one_of, space0},
    combinator::rest,
};

/// Parses a complete comment line (optional whitespace + `#` or `;` + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (space0, one_of("#;"), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Result of parsing a section header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader<'a> {
    /// The glob pattern between the brackets, exactly as written.
    pub pattern: &'a str,
    /// Byte offset of the pattern start within the line.
    pub pattern_offset: usize,
}

/// Parses a section header line: `[pattern]` with optional surrounding
/// whitespace. The pattern runs to the last `]` on the line, so brackets
/// inside the glob (e.g. `[*.[ch]]`) are preserved.
pub fn parse_section_header(input: &str) -> IResult<&str, SectionHeader<'_>> {
    let (after_bracket, (leading, _)) = (space0, char('[')).parse(input)?;

    let trimmed = after_bracket.trim_end();
    let Some(close) = trimmed.rfind(']') else {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    };

    Ok((
        &after_bracket[close + 1..],
        SectionHeader {
            pattern: &after_bracket[..close],
            pattern_offset: leading.len() + 1,
        },
    ))
}

/// Returns true if the line looks like a section header (starts with `[`)
/// even when it is malformed. Used for targeted error reporting.
pub fn looks_like_section_header(input: &str) -> bool {
    input.trim_start().starts_with('[')
}

/// Result of parsing a `key = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue<'a> {
    /// The key text with surrounding whitespace trimmed (original case).
    pub key: &'a str,
    /// The value text with surrounding whitespace trimmed.
    pub value: &'a str,
    /// Byte offset of the key start within the line.
    pub key_offset: usize,
}

/// Parses a `key = value` line. Whitespace around both key and value is
/// trimmed; both key and value may be empty (the parser reports empty keys).
pub fn parse_key_value(input: &str) -> IResult<&str, KeyValue<'_>> {
    let (rest_input, (leading, raw_key, _, raw_value)) = (
        space0,
        take_while(|c| c != '=' && c != '\n'),
        char('='),
        rest,
    )
        .parse(input)?;

    Ok((
        rest_input,
        KeyValue {
            key: raw_key.trim(),
            value: raw_value.trim(),
            key_offset: leading.len() + (raw_key.len() - raw_key.trim_start().len()),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_with_hash() {
        let (_rest, content) = parse_comment_line("# a comment").unwrap();
        assert_eq!(content, " a comment");
    }

    #[test]
    fn comment_with_semicolon() {
        let (_rest, content) = parse_comment_line("; old style").unwrap();
        assert_eq!(content, " old style");
    }

    #[test]
    fn comment_with_leading_whitespace() {
        let (_rest, content) = parse_comment_line("   # indented").unwrap();
        assert_eq!(content, " indented");
    }

    #[test]
    fn not_a_comment() {
        assert!(parse_comment_line("key = value").is_err());
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   "));
        assert!(is_blank_line("\t"));
        assert!(!is_blank_line(" x "));
    }

    #[test]
    fn section_header_simple() {
        let (rest, header) = parse_section_header("[*.rs]").unwrap();
        assert_eq!(header.pattern, "*.rs");
        assert_eq!(header.pattern_offset, 1);
        assert_eq!(rest, "");
    }

    #[test]
    fn section_header_with_leading_whitespace() {
        let (_rest, header) = parse_section_header("  [*]").unwrap();
        assert_eq!(header.pattern, "*");
        assert_eq!(header.pattern_offset, 3);
    }

    #[test]
    fn section_header_with_inner_brackets() {
        let (_rest, header) = parse_section_header("[*.[ch]]").unwrap();
        assert_eq!(header.pattern, "*.[ch]");
    }

    #[test]
    fn section_header_unterminated() {
        assert!(parse_section_header("[*.rs").is_err());
    }

    #[test]
    fn looks_like_header_detection() {
        assert!(looks_like_section_header("[*.rs"));
        assert!(looks_like_section_header("  [oops"));
        assert!(!looks_like_section_header("key = value"));
    }

    #[test]
    fn key_value_trims_whitespace() {
        let (_rest, kv) = parse_key_value("indent_style = space").unwrap();
        assert_eq!(kv.key, "indent_style");
        assert_eq!(kv.value, "space");
    }

    #[test]
    fn key_value_no_spaces() {
        let (_rest, kv) = parse_key_value("tab_width=8").unwrap();
        assert_eq!(kv.key, "tab_width");
        assert_eq!(kv.value, "8");
    }

    #[test]
    fn key_value_empty_value() {
        let (_rest, kv) = parse_key_value("charset =").unwrap();
        assert_eq!(kv.key, "charset");
        assert_eq!(kv.value, "");
    }

    #[test]
    fn key_value_offset_skips_leading_whitespace() {
        let (_rest, kv) = parse_key_value("  end_of_line = lf").unwrap();
        assert_eq!(kv.key, "end_of_line");
        assert_eq!(kv.key_offset, 2);
    }

    #[test]
    fn key_value_requires_equals() {
        assert!(parse_key_value("just some words").is_err());
    }

    #[test]
    fn key_value_allows_empty_key() {
        let (_rest, kv) = parse_key_value("= orphaned").unwrap();
        assert_eq!(kv.key, "");
        assert_eq!(kv.value, "orphaned");
    }
}
