//! Line terminator check for the `end_of_line` property.

use super::{Check, CheckContext};
use crate::lint::violation::{LintResult, Violation};

/// Flags every line whose terminator differs from the declared
/// `end_of_line`. The final line is exempt when it has no terminator at
/// all; that case belongs to the final-newline check.
pub struct EndOfLineCheck;

impl Check for EndOfLineCheck {
    fn name(&self) -> &'static str {
        "end_of_line"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> LintResult {
        let mut result = LintResult::new();
        let Some(expected) = ctx.settings.end_of_line() else {
            return result;
        };

        for line in ctx.content.lines() {
            if let Some(terminator) = line.terminator
                && terminator != expected.terminator()
            {
                result.push(Violation::WrongLineEnding {
                    expected,
                    found: terminator.to_string(),
                    span: line.span_at(line.text.len() + 1, terminator.len()),
                });
            }
        }
        result
    }
}
