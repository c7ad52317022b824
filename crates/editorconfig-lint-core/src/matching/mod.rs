//! Pattern matching for `.editorconfig` section globs.
//!
//! This module implements the EditorConfig glob dialect used by section
//! headers. Patterns follow these rules:
//!
//! - `*` matches any sequence of non-slash characters
//! - `**` matches any sequence including slashes
//! - `?` matches a single non-slash character
//! - `[abc]` / `[!abc]` match bracket sets with optional negation
//! - `{a,b,c}` matches any of the comma-separated alternatives (nestable)
//! - `{1..10}` matches any integer in the inclusive range
//! - `/` at the start anchors to the defining `.editorconfig`'s directory
//! - Patterns without a `/` match at any depth below the defining directory

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use thiserror::Error;

/// Guard against pathological `{1..1000000}` ranges.
const MAX_RANGE_ALTERNATIVES: i64 = 4096;

/// An error produced when compiling a malformed section glob.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    /// A `{` has no matching `}`.
    #[error("pattern '{pattern}' has an unmatched '{{'")]
    UnmatchedBrace {
        /// The offending pattern.
        pattern: String,
    },

    /// A `{num1..num2}` range is not a valid integer range.
    #[error("pattern '{pattern}' has an invalid numeric range '{{{range}}}'")]
    InvalidRange {
        /// The offending pattern.
        pattern: String,
        /// The range text between the braces.
        range: String,
    },

    /// The pattern is not a valid glob (e.g. an unmatched `[`).
    #[error("pattern '{pattern}' is not a valid glob: {reason}")]
    InvalidGlob {
        /// The offending pattern.
        pattern: String,
        /// Why the glob failed to compile.
        reason: String,
    },
}

/// A compiled EditorConfig section pattern that can match relative paths.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The original pattern string.
    original: String,
    /// The compiled glob set, one glob per brace-expanded alternative.
    glob_set: GlobSet,
}

impl Pattern {
    /// Compiles an EditorConfig section pattern for matching.
    ///
    /// Fails with [`PatternError`] on malformed brace or bracket syntax.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let alternatives = expand_braces(pattern)?;

        let mut builder = GlobSetBuilder::new();
        for alternative in &alternatives {
            let normalized = normalize_pattern(alternative);
            // Use literal_separator to ensure * and ? don't match /
            let glob = GlobBuilder::new(&normalized)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map_err(|e| PatternError::InvalidGlob {
                    pattern: pattern.to_string(),
                    reason: e.kind().to_string(),
                })?;
            builder.add(glob);
        }

        let glob_set = builder.build().map_err(|e| PatternError::InvalidGlob {
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })?;

        Ok(Self {
            original: pattern.to_string(),
            glob_set,
        })
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Checks if this pattern matches the given path.
    ///
    /// The path must be relative to the defining `.editorconfig`'s directory
    /// and use forward slashes.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.glob_set.is_match(path)
    }
}

/// Normalizes a brace-free EditorConfig pattern to a glob pattern.
fn normalize_pattern(pattern: &str) -> String {
    if let Some(anchored) = pattern.strip_prefix('/') {
        // Anchored to the defining directory.
        anchored.to_string()
    } else if !pattern.contains('/') {
        // Pattern without a slash matches at any depth.
        format!("**/{}", pattern)
    } else {
        pattern.to_string()
    }
}

/// Expands brace alternation and numeric ranges into plain glob patterns.
///
/// `a.{js,ts}` becomes `["a.js", "a.ts"]`; `{1..3}.txt` becomes
/// `["1.txt", "2.txt", "3.txt"]`. Braces with a single alternative and no
/// range (`{lib}`) are literal text, per the EditorConfig dialect.
fn expand_braces(pattern: &str) -> Result<Vec<String>, PatternError> {
    let Some(group) = find_brace_group(pattern)? else {
        return Ok(vec![pattern.to_string()]);
    };

    let prefix = &pattern[..group.open];
    let inner = &pattern[group.open + 1..group.close];
    let suffix = &pattern[group.close + 1..];

    let parts = split_alternatives(inner);
    let alternatives: Vec<String> = if parts.len() > 1 {
        parts.into_iter().map(str::to_string).collect()
    } else if let Some(range) = parse_numeric_range(pattern, inner)? {
        range
    } else {
        // No comma and no range: the braces are literal. Escape them so
        // globset doesn't treat them as alternation syntax.
        let head = format!("{}\\{{{}\\}}", prefix, escape_braces(inner));
        return Ok(expand_braces(suffix)?
            .into_iter()
            .map(|tail| format!("{}{}", head, tail))
            .collect());
    };

    let mut expanded = Vec::new();
    for alternative in alternatives {
        let candidate = format!("{}{}{}", prefix, alternative, suffix);
        expanded.extend(expand_braces(&candidate)?);
    }
    Ok(expanded)
}

/// Backslash-escapes all unescaped braces so globset treats them literally.
fn escape_braces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// The byte offsets of the first top-level brace group.
struct BraceGroup {
    open: usize,
    close: usize,
}

/// Finds the first unescaped `{` and its matching `}`, honoring nesting.
fn find_brace_group(pattern: &str) -> Result<Option<BraceGroup>, PatternError> {
    let bytes = pattern.as_bytes();
    let mut open = None;
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1, // skip escaped character
            b'{' => {
                if depth == 0 {
                    open = Some(i);
                }
                depth += 1;
            }
            b'}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0
                        && let Some(open) = open
                    {
                        return Ok(Some(BraceGroup { open, close: i }));
                    }
                }
                // A stray `}` with no opener is literal.
            }
            _ => {}
        }
        i += 1;
    }

    if open.is_some() {
        return Err(PatternError::UnmatchedBrace {
            pattern: pattern.to_string(),
        });
    }
    Ok(None)
}

/// Splits brace-group content on top-level commas.
fn split_alternatives(inner: &str) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&inner[start..]);
    parts
}

/// Parses `num1..num2` brace content into its expanded alternatives.
///
/// Returns `Ok(None)` when the content is not a numeric range at all.
fn parse_numeric_range(pattern: &str, inner: &str) -> Result<Option<Vec<String>>, PatternError> {
    let Some((lo, hi)) = inner.split_once("..") else {
        return Ok(None);
    };
    let (Ok(lo), Ok(hi)) = (lo.trim().parse::<i64>(), hi.trim().parse::<i64>()) else {
        // Something like `{a..b}`: not a numeric range, not alternation.
        return Err(PatternError::InvalidRange {
            pattern: pattern.to_string(),
            range: inner.to_string(),
        });
    };

    if lo > hi || hi - lo >= MAX_RANGE_ALTERNATIVES {
        return Err(PatternError::InvalidRange {
            pattern: pattern.to_string(),
            range: inner.to_string(),
        });
    }

    Ok(Some((lo..=hi).map(|n| n.to_string()).collect()))
}
