//! Parser module for `.editorconfig` files.
//!
//! This module provides functionality to parse `.editorconfig` files into an
//! ordered sequence of glob-scoped sections with span metadata for error
//! reporting.
//!
//! # Example
//!
//! ```rust
//! use editorconfig_lint_core::parse::parse_editorconfig;
//!
//! let input = r#"
//! root = true
//!
//! [*.rs]
//! indent_style = space
//! indent_size = 4
//! "#;
//!
//! let result = parse_editorconfig(input);
//! if result.is_ok() {
//!     assert!(result.file.root);
//!     for section in &result.file.sections {
//!         println!("[{}]", section.pattern);
//!     }
//! }
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
pub mod span;

// Re-export public types
pub use ast::{EditorConfigFile, Property, Section};
pub use error::{ParseError, ParseResult};
pub use parser::{
    ParserConfig, parse_editorconfig, parse_editorconfig_strict, parse_editorconfig_with_config,
};
pub use span::Span;
