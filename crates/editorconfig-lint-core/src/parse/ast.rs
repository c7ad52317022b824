//! Data model for parsed `.editorconfig` files.

use super::span::Span;

/// A single `key = value` property inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// The property key, lowercased (keys are case-insensitive).
    pub key: String,
    /// The property value, with surrounding whitespace trimmed.
    pub value: String,
    /// Location of the property line.
    pub span: Span,
}

/// A glob-scoped block of properties within one `.editorconfig` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The glob pattern from the `[...]` header, exactly as written.
    pub pattern: String,
    /// Location of the pattern within the header line.
    pub pattern_span: Span,
    properties: Vec<Property>,
}

impl Section {
    /// Creates a new empty section for the given pattern.
    pub fn new(pattern: impl Into<String>, pattern_span: Span) -> Self {
        Self {
            pattern: pattern.into(),
            pattern_span,
            properties: Vec::new(),
        }
    }

    /// Adds a property to this section.
    ///
    /// Keys are lowercased. A duplicate key within the same section is
    /// ignored: the first occurrence wins.
    pub fn insert(&mut self, key: &str, value: &str, span: Span) {
        let key = key.to_lowercase();
        if self.properties.iter().any(|p| p.key == key) {
            return;
        }
        self.properties.push(Property {
            key,
            value: value.to_string(),
            span,
        });
    }

    /// Looks up a property value by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Iterates over the properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// Returns the number of properties in this section.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the section has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A parsed `.editorconfig` file: an ordered sequence of sections plus the
/// `root` flag from the preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfigFile {
    /// True if the preamble declared `root = true`, which terminates the
    /// upward directory search during resolution.
    pub root: bool,
    /// Sections in declaration order.
    pub sections: Vec<Section>,
}

impl EditorConfigFile {
    /// Creates a new file from the given sections.
    pub fn new(root: bool, sections: Vec<Section>) -> Self {
        Self { root, sections }
    }
}
