//! Final newline check for `insert_final_newline`.

use super::{Check, CheckContext};
use crate::lint::violation::{LintResult, Violation};
use crate::parse::Span;

/// Enforces `insert_final_newline`. With `true` a non-empty file must end
/// with a line terminator; with `false` it must not. Empty files satisfy
/// both settings.
pub struct FinalNewlineCheck;

impl Check for FinalNewlineCheck {
    fn name(&self) -> &'static str {
        "insert_final_newline"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> LintResult {
        let mut result = LintResult::new();
        let Some(required) = ctx.settings.insert_final_newline() else {
            return result;
        };
        if ctx.content.is_empty() {
            return result;
        }

        let Some(last) = ctx.content.lines().last() else {
            return result;
        };

        if required && last.terminator.is_none() {
            result.push(Violation::MissingFinalNewline {
                span: last.span_at(last.text.len() + 1, 0),
            });
        } else if !required && last.terminator.is_some() {
            // With a trailing terminator the last item from lines() is the
            // final terminated line; point at its terminator.
            result.push(Violation::UnexpectedFinalNewline {
                span: Span::new(
                    last.offset + last.text.len(),
                    last.number,
                    last.text.len() + 1,
                    last.terminator.map_or(0, str::len),
                ),
            });
        }
        result
    }
}
