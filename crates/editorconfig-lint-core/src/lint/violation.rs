//! Violation types produced by the checks.

use crate::parse::Span;
use crate::properties::{Charset, EndOfLine, IndentStyle};
use serde::Serialize;
use thiserror::Error;

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory; does not fail a check run unless requested.
    Warning,
    /// A definite deviation from the declared settings.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single deviation from the effective settings, located by span.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A line ends with a terminator other than the declared `end_of_line`.
    #[error("line ends with {} but end_of_line is {}", found_name(found), expected.as_str())]
    WrongLineEnding {
        expected: EndOfLine,
        /// The terminator actually found (`\n`, `\r`, or `\r\n`).
        found: String,
        span: Span,
    },

    /// Whitespace before the line terminator with
    /// `trim_trailing_whitespace = true`.
    #[error("trailing whitespace")]
    TrailingWhitespace { span: Span },

    /// The file does not end with a newline but `insert_final_newline = true`.
    #[error("missing final newline")]
    MissingFinalNewline { span: Span },

    /// The file ends with a newline but `insert_final_newline = false`.
    #[error("final newline present but insert_final_newline is false")]
    UnexpectedFinalNewline { span: Span },

    /// Leading whitespace uses the wrong character for `indent_style`.
    #[error("indentation uses {} but indent_style is {}", other_style(expected), expected.as_str())]
    WrongIndentStyle { expected: IndentStyle, span: Span },

    /// Space indentation is not a multiple of the indent width.
    #[error("indentation of {found_width} columns is not a multiple of {expected_width}")]
    WrongIndentWidth {
        expected_width: usize,
        found_width: usize,
        span: Span,
    },

    /// Tabs appear after spaces in the leading whitespace.
    #[error("mixed tabs and spaces in indentation")]
    MixedIndentation { span: Span },

    /// The file's byte order mark disagrees with the declared `charset`.
    #[error("file looks like {found} but charset is {}", expected.as_str())]
    CharsetMismatch {
        expected: Charset,
        /// Description of what the BOM heuristic observed.
        found: String,
        span: Span,
    },
}

fn found_name(found: &str) -> &'static str {
    EndOfLine::name_of(found)
}

fn other_style(expected: &IndentStyle) -> &'static str {
    match expected {
        IndentStyle::Space => "tabs",
        IndentStyle::Tab => "spaces",
    }
}

impl Violation {
    /// The EditorConfig property this violation is checked against.
    pub fn property(&self) -> &'static str {
        match self {
            Self::WrongLineEnding { .. } => "end_of_line",
            Self::TrailingWhitespace { .. } => "trim_trailing_whitespace",
            Self::MissingFinalNewline { .. } | Self::UnexpectedFinalNewline { .. } => {
                "insert_final_newline"
            }
            Self::WrongIndentStyle { .. } | Self::MixedIndentation { .. } => "indent_style",
            Self::WrongIndentWidth { .. } => "indent_size",
            Self::CharsetMismatch { .. } => "charset",
        }
    }

    /// What the effective settings expected, in property-value spelling.
    pub fn expected(&self) -> String {
        match self {
            Self::WrongLineEnding { expected, .. } => expected.as_str().to_string(),
            Self::TrailingWhitespace { .. } => "no trailing whitespace".to_string(),
            Self::MissingFinalNewline { .. } => "final newline".to_string(),
            Self::UnexpectedFinalNewline { .. } => "no final newline".to_string(),
            Self::WrongIndentStyle { expected, .. } => expected.as_str().to_string(),
            Self::WrongIndentWidth { expected_width, .. } => {
                format!("multiple of {expected_width}")
            }
            Self::MixedIndentation { .. } => "consistent indentation".to_string(),
            Self::CharsetMismatch { expected, .. } => expected.as_str().to_string(),
        }
    }

    /// What was actually observed in the file.
    pub fn observed(&self) -> String {
        match self {
            Self::WrongLineEnding { found, .. } => EndOfLine::name_of(found).to_string(),
            Self::TrailingWhitespace { .. } => "trailing whitespace".to_string(),
            Self::MissingFinalNewline { .. } => "no final newline".to_string(),
            Self::UnexpectedFinalNewline { .. } => "final newline".to_string(),
            Self::WrongIndentStyle { expected, .. } => other_style(expected).to_string(),
            Self::WrongIndentWidth { found_width, .. } => format!("{found_width} columns"),
            Self::MixedIndentation { .. } => "tabs after spaces".to_string(),
            Self::CharsetMismatch { found, .. } => found.clone(),
        }
    }

    /// The span where the violation was found.
    pub fn span(&self) -> &Span {
        match self {
            Self::WrongLineEnding { span, .. }
            | Self::TrailingWhitespace { span }
            | Self::MissingFinalNewline { span }
            | Self::UnexpectedFinalNewline { span }
            | Self::WrongIndentStyle { span, .. }
            | Self::WrongIndentWidth { span, .. }
            | Self::MixedIndentation { span }
            | Self::CharsetMismatch { span, .. } => span,
        }
    }

    /// The 1-based line number of the violation.
    pub fn line(&self) -> usize {
        self.span().line
    }

    /// Severity of this violation. Charset mismatches are heuristic (BOM
    /// sniffing only) and report as warnings; everything else is definite.
    pub fn severity(&self) -> Severity {
        match self {
            Self::CharsetMismatch { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Accumulated violations for one file.
#[derive(Debug, Clone, Default)]
pub struct LintResult {
    violations: Vec<Violation>,
}

impl LintResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Absorbs another result's violations.
    pub fn merge(&mut self, other: LintResult) {
        self.violations.extend(other.violations);
    }

    /// True if no violations were recorded.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// All recorded violations, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the result, yielding the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Number of error-severity violations.
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity() == Severity::Error)
            .count()
    }

    /// Number of warning-severity violations.
    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity() == Severity::Warning)
            .count()
    }
}
