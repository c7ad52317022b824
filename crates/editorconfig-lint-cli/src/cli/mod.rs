//! CLI module for the EditorConfig linter.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// EditorConfig compliance linter - checks and fixes files against the
/// `.editorconfig` declarations that apply to them.
///
/// Walks the given paths, resolves the effective properties for every file
/// from the surrounding `.editorconfig` hierarchy, and reports (or repairs)
/// deviations. Supports both human-readable and JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "editorconfig-lint")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Files or directories to check. Directories are walked recursively.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Directory at which the upward `.editorconfig` search stops.
    #[arg(long, env = "EDITORCONFIG_LINT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Rewrite files to satisfy their settings instead of only reporting.
    #[arg(long)]
    pub fix: bool,

    /// Comma-separated glob patterns (relative to the root) to exclude.
    #[arg(long, env = "EDITORCONFIG_LINT_EXCLUDE", value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Include hidden files and directories when walking.
    #[arg(long)]
    pub include_hidden: bool,

    /// Do not honor .gitignore files when walking.
    #[arg(long)]
    pub no_gitignore: bool,

    /// Failure level for reported violations.
    /// 'warning' treats both errors and warnings as failures.
    /// 'error' only treats errors as failures.
    #[arg(long, env = "CHECK_FAILURE_LEVEL", default_value = "warning")]
    pub check_failure_level: FailureLevel,

    /// Output results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Failure level for reported violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FailureLevel {
    /// Treat both warnings and errors as failures.
    #[default]
    Warning,
    /// Only treat errors as failures.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let args = Args::parse_from(["editorconfig-lint"]);
        assert_eq!(args.paths, vec![PathBuf::from(".")]);
        assert_eq!(args.root, PathBuf::from("."));
        assert!(!args.fix);
    }

    #[test]
    fn test_multiple_paths() {
        let args = Args::parse_from(["editorconfig-lint", "src", "README.md"]);
        assert_eq!(
            args.paths,
            vec![PathBuf::from("src"), PathBuf::from("README.md")]
        );
    }

    #[test]
    fn test_fix_flag() {
        let args = Args::parse_from(["editorconfig-lint", "--fix"]);
        assert!(args.fix);
    }

    #[test]
    fn test_exclude_list() {
        let args = Args::parse_from([
            "editorconfig-lint",
            "--exclude",
            "target/**,vendor/**",
        ]);
        let excludes = args.exclude.unwrap();
        assert_eq!(excludes, vec!["target/**", "vendor/**"]);
    }

    #[test]
    fn test_default_failure_level() {
        let args = Args::parse_from(["editorconfig-lint"]);
        assert_eq!(args.check_failure_level, FailureLevel::Warning);
    }

    #[test]
    fn test_error_failure_level() {
        let args = Args::parse_from(["editorconfig-lint", "--check-failure-level", "error"]);
        assert_eq!(args.check_failure_level, FailureLevel::Error);
    }

    #[test]
    fn test_json_output_flag() {
        let args = Args::parse_from(["editorconfig-lint", "--json"]);
        assert!(args.json);

        let args = Args::parse_from(["editorconfig-lint", "-j"]);
        assert!(args.json);
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(["editorconfig-lint"]);
        assert_eq!(args.verbose, 0);

        let args = Args::parse_from(["editorconfig-lint", "-vv"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_walk_flags() {
        let args = Args::parse_from(["editorconfig-lint", "--include-hidden", "--no-gitignore"]);
        assert!(args.include_hidden);
        assert!(args.no_gitignore);
    }
}
