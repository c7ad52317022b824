//! Directory traversal for collecting target files.

use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Traversal options for [`list_files`].
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Include hidden files and directories.
    pub include_hidden: bool,
    /// Honor `.gitignore` and related ignore files.
    pub respect_gitignore: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            respect_gitignore: true,
        }
    }
}

/// Collects the regular files under `path`. A `path` that is itself a file
/// yields just that file. Traversal errors are logged and skipped so one
/// unreadable directory does not abort the run.
pub fn list_files(path: &Path, config: &WalkerConfig) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(path);
    builder
        .hidden(!config.include_hidden)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .parents(config.respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => warn!("Skipping unreadable entry: {}", err),
        }
    }
    files.sort();
    debug!("Collected {} file(s) under {}", files.len(), path.display());
    files
}
