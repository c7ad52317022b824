//! Core engine for checking and fixing files against `.editorconfig`
//! declarations.
//!
//! The crate is organized along the pipeline a file passes through:
//!
//! - [`parse`]: reads `.editorconfig` files into ordered, span-annotated
//!   sections.
//! - [`matching`]: compiles section globs (including brace alternation and
//!   numeric ranges) and matches them against relative paths.
//! - [`resolve`]: walks the directory hierarchy and merges matching sections
//!   into the effective settings for one target file.
//! - [`content`]: the in-memory file model shared by checks and fixes.
//! - [`lint`]: the rule checks and their violations.
//! - [`fix`]: rewrites files to satisfy their settings where a safe rewrite
//!   exists.
//! - [`engine`]: batch orchestration with per-file failure isolation.
//!
//! # Example
//!
//! ```no_run
//! use editorconfig_lint_core::engine::Engine;
//! use std::path::Path;
//!
//! let engine = Engine::new(".");
//! let report = engine.check_file(Path::new("src/main.rs")).unwrap();
//! for violation in &report.violations {
//!     println!("line {}: {}", violation.line(), violation);
//! }
//! ```

pub mod content;
pub mod engine;
pub mod fix;
pub mod lint;
pub mod matching;
pub mod parse;
pub mod properties;
pub mod resolve;

pub use content::FileContent;
pub use engine::{Engine, EngineError, FileFailure, FileReport, FixReport};
pub use lint::{LintResult, Severity, Violation};
pub use properties::EffectiveSettings;
pub use resolve::{ConfigCache, ResolveError};
