//! Trailing whitespace check for `trim_trailing_whitespace`.

use super::{Check, CheckContext};
use crate::lint::violation::{LintResult, Violation};

/// Flags spaces or tabs before the line terminator when
/// `trim_trailing_whitespace = true`. Whitespace-only lines count: their
/// entire content is trailing whitespace.
pub struct TrailingWhitespaceCheck;

impl Check for TrailingWhitespaceCheck {
    fn name(&self) -> &'static str {
        "trim_trailing_whitespace"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> LintResult {
        let mut result = LintResult::new();
        if ctx.settings.trim_trailing_whitespace() != Some(true) {
            return result;
        }

        for line in ctx.content.lines() {
            let trimmed_len = line.text.trim_end_matches([' ', '\t']).len();
            if trimmed_len < line.text.len() {
                result.push(Violation::TrailingWhitespace {
                    span: line.span_at(trimmed_len + 1, line.text.len() - trimmed_len),
                });
            }
        }
        result
    }
}
