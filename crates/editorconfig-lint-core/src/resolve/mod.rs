//! Hierarchy resolution: computing the effective property set for a file.
//!
//! Resolution walks from the target file's directory upward, collecting
//! `.editorconfig` files until one declares `root = true` (that file is still
//! used) or the search root is reached. Files are then applied
//! outermost-first so properties from closer files override those from
//! farther ones; within one file, later matching sections override earlier
//! ones.

use crate::matching::{Pattern, PatternError};
use crate::parse::{EditorConfigFile, parse_editorconfig};
use crate::properties::EffectiveSettings;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// The conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = ".editorconfig";

/// Errors that can occur while resolving properties for a file.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A section header contained a glob the matcher rejects.
    #[error("invalid pattern in {config}: {source}")]
    Pattern {
        /// Path of the `.editorconfig` file holding the bad pattern.
        config: PathBuf,
        #[source]
        source: PatternError,
    },
}

/// Shared cache of parsed `.editorconfig` files, keyed by directory.
///
/// `None` records a directory known to have no usable configuration file, so
/// repeated lookups for sibling targets skip the filesystem entirely. The
/// cache is safe to share across worker threads.
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: RwLock<HashMap<PathBuf, Option<Arc<EditorConfigFile>>>>,
}

impl ConfigCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed configuration for `dir`, loading and caching it on
    /// first access. Unreadable or absent files cache as `None`.
    fn load(&self, dir: &Path) -> Option<Arc<EditorConfigFile>> {
        {
            let entries = match self.entries.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(cached) = entries.get(dir) {
                return cached.clone();
            }
        }

        let loaded = load_config_file(&dir.join(CONFIG_FILE_NAME)).map(Arc::new);

        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries
            .entry(dir.to_path_buf())
            .or_insert(loaded)
            .clone()
    }
}

fn load_config_file(path: &Path) -> Option<EditorConfigFile> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!("Skipping unreadable config {}: {}", path.display(), err);
            return None;
        }
    };

    let result = parse_editorconfig(&text);
    for error in &result.errors {
        warn!("{}:{}: {}", path.display(), error.line(), error);
    }
    Some(result.file)
}

/// Computes the effective settings for `target`.
///
/// `root_dir` bounds the upward search; `.editorconfig` files above it are
/// never consulted even when no file declares `root = true`.
pub fn resolve(
    root_dir: &Path,
    target: &Path,
    cache: &ConfigCache,
) -> Result<EffectiveSettings, ResolveError> {
    // Innermost first during collection.
    let mut chain: Vec<(PathBuf, Arc<EditorConfigFile>)> = Vec::new();

    let mut dir = target.parent();
    while let Some(current) = dir {
        if let Some(file) = cache.load(current) {
            let is_root = file.root;
            chain.push((current.to_path_buf(), file));
            if is_root {
                trace!("root = true in {}, stopping ascent", current.display());
                break;
            }
        }
        if current == root_dir {
            break;
        }
        dir = current.parent();
    }

    let mut settings = EffectiveSettings::new();

    // Apply outermost first so closer files win.
    for (config_dir, file) in chain.iter().rev() {
        let Some(rel) = relative_slash_path(target, config_dir) else {
            continue;
        };
        for section in &file.sections {
            let pattern =
                Pattern::new(&section.pattern).map_err(|source| ResolveError::Pattern {
                    config: config_dir.join(CONFIG_FILE_NAME),
                    source,
                })?;
            if pattern.matches(&rel) {
                trace!(
                    "{}: section [{}] matches {}",
                    config_dir.display(),
                    section.pattern,
                    rel
                );
                for property in section.properties() {
                    settings.insert(&property.key, &property.value);
                }
            }
        }
    }

    debug!(
        "Resolved {} properties for {}",
        settings.len(),
        target.display()
    );
    Ok(settings)
}

/// The target path relative to the config file's directory, with forward
/// slashes regardless of platform.
fn relative_slash_path(target: &Path, config_dir: &Path) -> Option<String> {
    let rel = target.strip_prefix(config_dir).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}
