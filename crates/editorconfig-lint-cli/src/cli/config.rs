//! Configuration handling for the CLI.
//!
//! This module validates CLI arguments into the paths, exclude globs, and
//! walker options the run needs.

use crate::cli::{Args, FailureLevel};
use editorconfig_lint_core::engine::WalkerConfig;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All checked files comply (fixes applied count as success).
    Success = 0,
    /// Application startup failed (wrong configuration or internal error).
    StartupFailure = 1,
    /// Violations were found (or files could not be processed).
    ViolationsFound = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

/// Validated and processed configuration for a run.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Canonical root bounding the `.editorconfig` search.
    pub root: PathBuf,
    /// Canonical target files and directories.
    pub targets: Vec<PathBuf>,
    /// Rewrite files instead of only reporting.
    pub fix: bool,
    /// Compiled exclude patterns, matched against root-relative paths.
    pub excludes: Option<GlobSet>,
    /// Directory traversal options.
    pub walker: WalkerConfig,
    /// Failure level for determining the exit code.
    pub failure_level: FailureLevel,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let root = args.root.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "root path '{}' is invalid: {}",
                args.root.display(),
                e
            ))
        })?;

        let mut targets = Vec::with_capacity(args.paths.len());
        for path in &args.paths {
            let canonical = path.canonicalize().map_err(|e| {
                ConfigError::Invalid(format!("path '{}' is invalid: {}", path.display(), e))
            })?;
            targets.push(canonical);
        }

        let excludes = match &args.exclude {
            Some(patterns) => Some(compile_excludes(patterns)?),
            None => None,
        };

        Ok(Self {
            root,
            targets,
            fix: args.fix,
            excludes,
            walker: WalkerConfig {
                include_hidden: args.include_hidden,
                respect_gitignore: !args.no_gitignore,
            },
            failure_level: args.check_failure_level,
            json_output: args.json,
        })
    }

    /// Returns true if the file is excluded by an `--exclude` pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let Some(excludes) = &self.excludes else {
            return false;
        };
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        excludes.is_match(rel)
    }

    /// Determines the exit code from the run results.
    pub fn exit_code_for_results(&self, has_errors: bool, has_warnings: bool) -> ExitCode {
        if has_errors {
            return ExitCode::ViolationsFound;
        }

        match self.failure_level {
            FailureLevel::Warning if has_warnings => ExitCode::ViolationsFound,
            _ => ExitCode::Success,
        }
    }
}

fn compile_excludes(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            ConfigError::Invalid(format!("exclude pattern '{}' is invalid: {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| ConfigError::Invalid(format!("failed to compile exclude patterns: {}", e)))
}
