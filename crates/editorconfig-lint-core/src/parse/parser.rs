//! Line and file-level parsers for `.editorconfig` files.
//!
//! This module combines the lexer components to parse complete lines
//! and entire `.editorconfig` files.

use super::ast::{EditorConfigFile, Section};
use super::error::{ParseError, ParseResult};
use super::lexer::{
    is_blank_line, looks_like_section_header, parse_comment_line, parse_key_value,
    parse_section_header,
};
use super::span::Span;
use log::{debug, trace};

/// Configuration options for the parser.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// If true, parsing stops at the first error (strict mode).
    /// If false, errors are collected and parsing continues (lenient mode).
    pub strict: bool,
}

impl ParserConfig {
    /// Creates a new parser config with default settings (lenient mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict mode parser config.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Creates a lenient mode parser config.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// What a single line contributes to the file being built.
#[derive(Debug)]
enum ParsedLine<'a> {
    Ignored,
    SectionStart(Section),
    Property { key: &'a str, value: &'a str, span: Span },
}

/// Parses a single line of a `.editorconfig` file.
fn parse_line(line_text: &str, line_num: usize, line_offset: usize) -> Result<ParsedLine<'_>, ParseError> {
    if is_blank_line(line_text) || parse_comment_line(line_text).is_ok() {
        return Ok(ParsedLine::Ignored);
    }

    if looks_like_section_header(line_text) {
        return match parse_section_header(line_text) {
            Ok((_, header)) => {
                let pattern_span = Span::new(
                    line_offset + header.pattern_offset,
                    line_num,
                    header.pattern_offset + 1,
                    header.pattern.len(),
                );
                Ok(ParsedLine::SectionStart(Section::new(header.pattern, pattern_span)))
            }
            Err(_) => {
                let span = Span::new(line_offset, line_num, 1, line_text.len());
                Err(ParseError::unterminated_section_header(span))
            }
        };
    }

    match parse_key_value(line_text) {
        Ok((_, kv)) => {
            if kv.key.is_empty() {
                let span = Span::new(line_offset, line_num, 1, line_text.len());
                return Err(ParseError::empty_key(span));
            }
            let span = Span::new(
                line_offset + kv.key_offset,
                line_num,
                kv.key_offset + 1,
                kv.key.len(),
            );
            Ok(ParsedLine::Property { key: kv.key, value: kv.value, span })
        }
        Err(_) => {
            let span = Span::new(line_offset, line_num, 1, line_text.len());
            Err(ParseError::invalid_line("expected 'key = value'", span))
        }
    }
}

/// Parses a `.editorconfig` file with the given configuration.
pub fn parse_editorconfig_with_config(input: &str, config: &ParserConfig) -> ParseResult {
    debug!(
        "Parsing .editorconfig ({} bytes, strict={})",
        input.len(),
        config.strict
    );
    let mut root = false;
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    let mut errors = Vec::new();
    let mut offset = 0;
    let mut remaining = input;

    for (line_idx, line_text) in input.lines().enumerate() {
        let line_num = line_idx + 1; // 1-based line numbers

        match parse_line(line_text, line_num, offset) {
            Ok(ParsedLine::Ignored) => {}
            Ok(ParsedLine::SectionStart(section)) => {
                trace!("Line {}: section [{}]", line_num, section.pattern);
                if let Some(done) = current.replace(section) {
                    sections.push(done);
                }
            }
            Ok(ParsedLine::Property { key, value, span }) => match current.as_mut() {
                Some(section) => section.insert(key, value, span),
                None => {
                    // Preamble: only `root` is meaningful before the first section.
                    if key.eq_ignore_ascii_case("root") {
                        root = value.eq_ignore_ascii_case("true");
                    } else {
                        trace!("Line {}: ignoring preamble property '{}'", line_num, key);
                    }
                }
            },
            Err(error) => {
                debug!("Line {}: parse error - {}", line_num, error);
                if config.strict {
                    debug!("Strict mode: stopping at first error");
                    if let Some(done) = current.take() {
                        sections.push(done);
                    }
                    return ParseResult::with_errors(
                        EditorConfigFile::new(root, sections),
                        vec![error],
                    );
                }
                errors.push(error);
            }
        }

        // Calculate actual byte offset for next line by examining the original input.
        // This correctly handles both Unix (\n) and Windows (\r\n) line endings.
        let line_with_ending_len = if remaining.len() > line_text.len() {
            let after_content = &remaining[line_text.len()..];
            if after_content.starts_with("\r\n") {
                line_text.len() + 2 // CRLF
            } else if after_content.starts_with('\n') {
                line_text.len() + 1 // LF
            } else {
                line_text.len()
            }
        } else {
            line_text.len()
        };

        offset += line_with_ending_len;
        remaining = &remaining[line_with_ending_len..];
    }

    if let Some(done) = current.take() {
        sections.push(done);
    }

    let file = EditorConfigFile::new(root, sections);

    debug!(
        "Parsing complete: {} sections, {} errors",
        file.sections.len(),
        errors.len()
    );
    if errors.is_empty() {
        ParseResult::ok(file)
    } else {
        ParseResult::with_errors(file, errors)
    }
}

/// Parses a `.editorconfig` file using default (lenient) configuration.
pub fn parse_editorconfig(input: &str) -> ParseResult {
    parse_editorconfig_with_config(input, &ParserConfig::default())
}

/// Parses a `.editorconfig` file in strict mode, stopping at first error.
pub fn parse_editorconfig_strict(input: &str) -> ParseResult {
    parse_editorconfig_with_config(input, &ParserConfig::strict())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_file() {
        let result = parse_editorconfig("");
        assert!(result.is_ok());
        assert!(!result.file.root);
        assert!(result.file.sections.is_empty());
    }

    #[test]
    fn parse_comments_and_blanks_only() {
        let input = "# comment\n; another\n\n   \n";
        let result = parse_editorconfig(input);
        assert!(result.is_ok());
        assert!(result.file.sections.is_empty());
    }

    #[test]
    fn parse_root_flag() {
        let result = parse_editorconfig("root = true\n");
        assert!(result.is_ok());
        assert!(result.file.root);
    }

    #[test]
    fn parse_root_flag_case_insensitive() {
        let result = parse_editorconfig("ROOT = TRUE\n");
        assert!(result.file.root);
    }

    #[test]
    fn root_false_is_not_root() {
        let result = parse_editorconfig("root = false\n");
        assert!(!result.file.root);
    }

    #[test]
    fn root_inside_section_is_a_plain_property() {
        let result = parse_editorconfig("[*]\nroot = true\n");
        assert!(!result.file.root);
        assert_eq!(result.file.sections[0].get("root"), Some("true"));
    }

    #[test]
    fn parse_single_section() {
        let input = "[*.rs]\nindent_style = space\nindent_size = 4\n";
        let result = parse_editorconfig(input);
        assert!(result.is_ok());
        assert_eq!(result.file.sections.len(), 1);

        let section = &result.file.sections[0];
        assert_eq!(section.pattern, "*.rs");
        assert_eq!(section.get("indent_style"), Some("space"));
        assert_eq!(section.get("indent_size"), Some("4"));
    }

    #[test]
    fn parse_multiple_sections_in_order() {
        let input = "[*]\nend_of_line = lf\n\n[*.md]\ntrim_trailing_whitespace = false\n";
        let result = parse_editorconfig(input);
        assert!(result.is_ok());
        assert_eq!(result.file.sections.len(), 2);
        assert_eq!(result.file.sections[0].pattern, "*");
        assert_eq!(result.file.sections[1].pattern, "*.md");
    }

    #[test]
    fn parse_full_file() {
        let input = r#"# top-level config
root = true

[*]
charset = utf-8
end_of_line = lf
insert_final_newline = true

[*.{js,ts}]
indent_style = space
indent_size = 2
"#;
        let result = parse_editorconfig(input);
        assert!(result.is_ok());
        assert!(result.file.root);
        assert_eq!(result.file.sections.len(), 2);
        assert_eq!(result.file.sections[1].pattern, "*.{js,ts}");
        assert_eq!(result.file.sections[1].get("indent_size"), Some("2"));
    }

    #[test]
    fn keys_are_case_insensitive() {
        let input = "[*]\nIndent_Style = tab\n";
        let result = parse_editorconfig(input);
        assert_eq!(result.file.sections[0].get("indent_style"), Some("tab"));
    }

    #[test]
    fn duplicate_key_in_section_first_wins() {
        let input = "[*]\nindent_size = 2\nindent_size = 8\n";
        let result = parse_editorconfig(input);
        assert_eq!(result.file.sections[0].get("indent_size"), Some("2"));
    }

    #[test]
    fn invalid_line_lenient_collects_error() {
        let input = "[*]\nthis is not a property\nindent_size = 4\n";
        let result = parse_editorconfig(input);
        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 1);
        // Parsing continued past the bad line.
        assert_eq!(result.file.sections[0].get("indent_size"), Some("4"));
    }

    #[test]
    fn invalid_line_strict_stops() {
        let input = "bogus line\n[*]\nindent_size = 4\n";
        let result = parse_editorconfig_strict(input);
        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 1);
        assert!(result.file.sections.is_empty());
    }

    #[test]
    fn unterminated_section_header_is_an_error() {
        let input = "[*.rs\nindent_size = 4\n";
        let result = parse_editorconfig(input);
        assert!(result.has_errors());
        assert!(matches!(
            result.errors[0],
            ParseError::UnterminatedSectionHeader { line: 1, .. }
        ));
    }

    #[test]
    fn empty_key_is_an_error() {
        let input = "[*]\n= value\n";
        let result = parse_editorconfig(input);
        assert!(result.has_errors());
        assert!(matches!(result.errors[0], ParseError::EmptyKey { line: 2, .. }));
    }

    #[test]
    fn span_positions_are_correct() {
        let input = "root = true\n[*.rs]\nindent_size = 4\n";
        let result = parse_editorconfig(input);
        assert!(result.is_ok());

        let section = &result.file.sections[0];
        assert_eq!(section.pattern_span.line, 2);
        assert_eq!(section.pattern_span.offset, 13); // after "root = true\n["
        assert_eq!(section.pattern_span.length, 4); // "*.rs"

        let prop = section.properties().next().unwrap();
        assert_eq!(prop.span.line, 3);
        assert_eq!(prop.span.column, 1);
    }

    #[test]
    fn crlf_offsets_are_correct() {
        let input = "root = true\r\n[*]\r\n";
        let result = parse_editorconfig(input);
        assert!(result.is_ok());
        assert_eq!(result.file.sections[0].pattern_span.offset, 14); // after "root = true\r\n["
    }

    #[test]
    fn values_keep_original_case() {
        // Glob patterns and values like `tab` vs `Tab` are matched
        // case-insensitively later; the parser stores them as written.
        let input = "[*]\ncharset = UTF-8\n";
        let result = parse_editorconfig(input);
        assert_eq!(result.file.sections[0].get("charset"), Some("UTF-8"));
    }
}
