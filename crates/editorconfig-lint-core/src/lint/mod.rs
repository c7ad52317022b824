//! Rule evaluation: checks a file's contents against its effective settings.
//!
//! # Example
//!
//! ```rust
//! use editorconfig_lint_core::content::FileContent;
//! use editorconfig_lint_core::lint::{CheckContext, CheckRunner};
//! use editorconfig_lint_core::properties::EffectiveSettings;
//!
//! let content = FileContent::from_text("hello \n");
//! let mut settings = EffectiveSettings::new();
//! settings.insert("trim_trailing_whitespace", "true");
//!
//! let runner = CheckRunner::with_all_checks();
//! let result = runner.run(&CheckContext {
//!     content: &content,
//!     settings: &settings,
//! });
//! assert_eq!(result.violations().len(), 1);
//! ```

mod checks;
mod violation;

pub use checks::{
    Check, CheckContext, CheckRunner, CharsetCheck, EndOfLineCheck, FinalNewlineCheck,
    IndentationCheck, TrailingWhitespaceCheck,
};
pub use violation::{LintResult, Severity, Violation};
