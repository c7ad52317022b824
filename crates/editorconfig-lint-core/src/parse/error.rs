//! Error types for `.editorconfig` file parsing.
//!
//! This module defines error types that capture parse failures
//! along with their source locations.

use super::span::Span;
use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A line could not be parsed.
    #[error("line {line}: {message}")]
    InvalidLine {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// Description of the error.
        message: String,
        /// Location in the source.
        span: Span,
    },

    /// A section header is missing its closing bracket.
    #[error("line {line}: section header has no closing ']'")]
    UnterminatedSectionHeader {
        /// The line number (1-based).
        line: usize,
        /// Location in the source.
        span: Span,
    },

    /// A property line has an empty key before the `=`.
    #[error("line {line}: property has an empty key")]
    EmptyKey {
        /// The line number (1-based).
        line: usize,
        /// Location in the source.
        span: Span,
    },
}

impl ParseError {
    /// Creates an invalid line error.
    pub fn invalid_line(message: impl Into<String>, span: Span) -> Self {
        Self::InvalidLine {
            line: span.line,
            message: message.into(),
            span,
        }
    }

    /// Creates an unterminated section header error.
    pub fn unterminated_section_header(span: Span) -> Self {
        Self::UnterminatedSectionHeader { line: span.line, span }
    }

    /// Creates an empty key error.
    pub fn empty_key(span: Span) -> Self {
        Self::EmptyKey { line: span.line, span }
    }

    /// Returns the span associated with this error.
    pub fn span(&self) -> &Span {
        match self {
            ParseError::InvalidLine { span, .. } => span,
            ParseError::UnterminatedSectionHeader { span, .. } => span,
            ParseError::EmptyKey { span, .. } => span,
        }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidLine { line, .. } => *line,
            ParseError::UnterminatedSectionHeader { line, .. } => *line,
            ParseError::EmptyKey { line, .. } => *line,
        }
    }
}

/// The result of parsing a `.editorconfig` file.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed file (may be partial if there were errors in lenient mode).
    pub file: super::ast::EditorConfigFile,
    /// Any errors encountered during parsing.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Creates a successful parse result with no errors.
    pub fn ok(file: super::ast::EditorConfigFile) -> Self {
        Self {
            file,
            errors: Vec::new(),
        }
    }

    /// Creates a parse result with errors.
    pub fn with_errors(file: super::ast::EditorConfigFile, errors: Vec<ParseError>) -> Self {
        Self { file, errors }
    }

    /// Returns true if parsing succeeded without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there were parse errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ast::EditorConfigFile;

    fn test_span() -> Span {
        Span::new(10, 2, 5, 15)
    }

    #[test]
    fn parse_error_invalid_line() {
        let error = ParseError::invalid_line("bad syntax", test_span());
        assert!(matches!(error, ParseError::InvalidLine { line: 2, .. }));
        assert_eq!(error.line(), 2);
        assert!(error.to_string().contains("bad syntax"));
    }

    #[test]
    fn parse_error_unterminated_section_header() {
        let error = ParseError::unterminated_section_header(test_span());
        assert!(matches!(
            error,
            ParseError::UnterminatedSectionHeader { line: 2, .. }
        ));
        assert!(error.to_string().contains("closing ']'"));
    }

    #[test]
    fn parse_error_empty_key() {
        let error = ParseError::empty_key(test_span());
        assert!(matches!(error, ParseError::EmptyKey { line: 2, .. }));
        assert!(error.to_string().contains("empty key"));
    }

    #[test]
    fn parse_error_span() {
        let span = test_span();
        let error = ParseError::invalid_line("test", span);
        assert_eq!(error.span(), &span);
    }

    #[test]
    fn parse_result_ok() {
        let result = ParseResult::ok(EditorConfigFile::default());
        assert!(result.is_ok());
        assert!(!result.has_errors());
    }

    #[test]
    fn parse_result_with_errors() {
        let errors = vec![ParseError::invalid_line("error", test_span())];
        let result = ParseResult::with_errors(EditorConfigFile::default(), errors);
        assert!(!result.is_ok());
        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 1);
    }
}
