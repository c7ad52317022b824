//! The individual rule checks and the runner that drives them.
//!
//! Each check inspects one property family. Checks only fire when the
//! effective settings enforce their property, so a file with no applicable
//! settings always lints clean.

mod charset;
mod end_of_line;
mod final_newline;
mod indentation;
mod trailing_whitespace;

pub use charset::CharsetCheck;
pub use end_of_line::EndOfLineCheck;
pub use final_newline::FinalNewlineCheck;
pub use indentation::IndentationCheck;
pub use trailing_whitespace::TrailingWhitespaceCheck;

use super::violation::LintResult;
use crate::content::FileContent;
use crate::properties::EffectiveSettings;
use log::{debug, trace};

/// Everything a check needs to inspect one file.
pub struct CheckContext<'a> {
    /// The file contents under inspection.
    pub content: &'a FileContent,
    /// The effective settings resolved for this file.
    pub settings: &'a EffectiveSettings,
}

/// A single compliance check.
pub trait Check {
    /// A short name for logging.
    fn name(&self) -> &'static str;

    /// Runs the check, returning any violations found.
    fn check(&self, ctx: &CheckContext<'_>) -> LintResult;
}

/// Runs a configured set of checks over one file.
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Creates a runner with no checks.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Creates a runner with every built-in check enabled.
    pub fn with_all_checks() -> Self {
        let mut runner = Self::new();
        runner.add_check(Box::new(EndOfLineCheck));
        runner.add_check(Box::new(TrailingWhitespaceCheck));
        runner.add_check(Box::new(FinalNewlineCheck));
        runner.add_check(Box::new(IndentationCheck));
        runner.add_check(Box::new(CharsetCheck));
        runner
    }

    /// Adds a check to the set.
    pub fn add_check(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Runs all checks and merges their results.
    pub fn run(&self, ctx: &CheckContext<'_>) -> LintResult {
        let mut result = LintResult::new();
        for check in &self.checks {
            trace!("Running check '{}'", check.name());
            let found = check.check(ctx);
            if !found.is_clean() {
                debug!(
                    "Check '{}' found {} violation(s)",
                    check.name(),
                    found.violations().len()
                );
            }
            result.merge(found);
        }
        result
    }
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::with_all_checks()
    }
}
