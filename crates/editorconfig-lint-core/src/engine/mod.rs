//! Batch orchestration: walking targets, resolving settings, and running
//! checks or fixes over many files with per-file failure isolation.

mod walker;

pub use walker::{WalkerConfig, list_files};

use crate::content::FileContent;
use crate::fix::fix;
use crate::lint::{CheckContext, CheckRunner, Violation};
use crate::resolve::{CONFIG_FILE_NAME, ConfigCache, ResolveError, resolve};
use log::{debug, trace};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop processing of one file (never the whole run).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not UTF-8 (with or without BOM); its bytes cannot be
    /// checked without misreading them.
    #[error("{path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Check results for one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

/// Fix results for one file.
#[derive(Debug)]
pub struct FixReport {
    pub path: PathBuf,
    /// True if the file was rewritten on disk.
    pub changed: bool,
    /// Violations that could not be fixed.
    pub unfixable: Vec<Violation>,
}

/// A file the engine had to give up on.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: EngineError,
}

/// Drives resolution and checking for files under one search root.
///
/// The parsed-configuration cache lives for the engine's lifetime, so every
/// file in a batch shares the same view of the `.editorconfig` hierarchy.
pub struct Engine {
    root: PathBuf,
    cache: ConfigCache,
    runner: CheckRunner,
}

impl Engine {
    /// Creates an engine whose upward `.editorconfig` search stops at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: ConfigCache::new(),
            runner: CheckRunner::with_all_checks(),
        }
    }

    /// The search root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load(&self, path: &Path) -> Result<FileContent, EngineError> {
        let bytes = std::fs::read(path).map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        FileContent::from_bytes(&bytes).ok_or_else(|| EngineError::InvalidEncoding {
            path: path.to_path_buf(),
        })
    }

    /// Checks a single file against its effective settings.
    pub fn check_file(&self, path: &Path) -> Result<FileReport, EngineError> {
        trace!("Checking {}", path.display());
        let content = self.load(path)?;
        let settings = resolve(&self.root, path, &self.cache)?;
        let result = self.runner.run(&CheckContext {
            content: &content,
            settings: &settings,
        });
        Ok(FileReport {
            path: path.to_path_buf(),
            violations: result.into_violations(),
        })
    }

    /// Fixes a single file in place, writing only when something changed.
    pub fn fix_file(&self, path: &Path) -> Result<FixReport, EngineError> {
        trace!("Fixing {}", path.display());
        let content = self.load(path)?;
        let settings = resolve(&self.root, path, &self.cache)?;
        let outcome = fix(&content, &settings);

        if outcome.changed {
            std::fs::write(path, outcome.content.to_bytes()).map_err(|source| {
                EngineError::FileWrite {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            debug!("Rewrote {}", path.display());
        }
        Ok(FixReport {
            path: path.to_path_buf(),
            changed: outcome.changed,
            unfixable: outcome.unfixable,
        })
    }

    /// Checks a batch of files. A failing file is recorded and the rest of
    /// the batch still runs.
    pub fn check_files(&self, paths: &[PathBuf]) -> (Vec<FileReport>, Vec<FileFailure>) {
        let mut reports = Vec::new();
        let mut failures = Vec::new();
        for path in paths.iter().filter(|p| !is_config_file(p)) {
            match self.check_file(path) {
                Ok(report) => reports.push(report),
                Err(error) => failures.push(FileFailure {
                    path: path.clone(),
                    error,
                }),
            }
        }
        (reports, failures)
    }

    /// Fixes a batch of files with the same isolation as [`check_files`].
    pub fn fix_files(&self, paths: &[PathBuf]) -> (Vec<FixReport>, Vec<FileFailure>) {
        let mut reports = Vec::new();
        let mut failures = Vec::new();
        for path in paths.iter().filter(|p| !is_config_file(p)) {
            match self.fix_file(path) {
                Ok(report) => reports.push(report),
                Err(error) => failures.push(FileFailure {
                    path: path.clone(),
                    error,
                }),
            }
        }
        (reports, failures)
    }
}

/// `.editorconfig` files configure the run; they are never lint targets.
fn is_config_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == CONFIG_FILE_NAME)
}
