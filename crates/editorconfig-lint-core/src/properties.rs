//! Effective property sets and typed accessors for the well-known
//! EditorConfig properties.
//!
//! An [`EffectiveSettings`] is the final merged property set applicable to
//! one specific file after hierarchy resolution. Raw values stay available
//! through [`EffectiveSettings::get`]; the typed accessors interpret the
//! well-known keys, treating the special value `unset` and unrecognized
//! values as "do not enforce".

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default tab display width when neither `tab_width` nor a numeric
/// `indent_size` is set.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Line-ending styles accepted by `end_of_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    /// Unix style (`\n`).
    Lf,
    /// Legacy Mac style (`\r`).
    Cr,
    /// Windows style (`\r\n`).
    CrLf,
}

impl EndOfLine {
    /// Parses an `end_of_line` property value.
    pub fn from_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "lf" => Some(Self::Lf),
            "cr" => Some(Self::Cr),
            "crlf" => Some(Self::CrLf),
            _ => None,
        }
    }

    /// Returns the property value spelling (`lf`, `cr`, `crlf`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Cr => "cr",
            Self::CrLf => "crlf",
        }
    }

    /// Returns the terminator character sequence.
    pub fn terminator(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Cr => "\r",
            Self::CrLf => "\r\n",
        }
    }

    /// Names a terminator sequence in property-value spelling.
    pub fn name_of(terminator: &str) -> &'static str {
        match terminator {
            "\n" => "lf",
            "\r" => "cr",
            "\r\n" => "crlf",
            _ => "unknown",
        }
    }
}

/// Indentation styles accepted by `indent_style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Indent with spaces.
    Space,
    /// Indent with tabs.
    Tab,
}

impl IndentStyle {
    /// Parses an `indent_style` property value.
    pub fn from_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "space" => Some(Self::Space),
            "tab" => Some(Self::Tab),
            _ => None,
        }
    }

    /// Returns the property value spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Tab => "tab",
        }
    }
}

/// The `indent_size` property: a column count, or the literal `tab` meaning
/// "same as `tab_width`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentSize {
    /// `indent_size = tab`.
    Tab,
    /// A numeric column count.
    Columns(usize),
}

/// Character sets accepted by `charset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    /// ISO-8859-1.
    Latin1,
    /// UTF-8 without a byte order mark.
    Utf8,
    /// UTF-8 with a byte order mark.
    Utf8Bom,
    /// UTF-16 big-endian (BOM required).
    Utf16Be,
    /// UTF-16 little-endian (BOM required).
    Utf16Le,
}

impl Charset {
    /// Parses a `charset` property value.
    pub fn from_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "latin1" => Some(Self::Latin1),
            "utf-8" => Some(Self::Utf8),
            "utf-8-bom" => Some(Self::Utf8Bom),
            "utf-16be" => Some(Self::Utf16Be),
            "utf-16le" => Some(Self::Utf16Le),
            _ => None,
        }
    }

    /// Returns the property value spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latin1 => "latin1",
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-bom",
            Self::Utf16Be => "utf-16be",
            Self::Utf16Le => "utf-16le",
        }
    }
}

/// The merged property set for exactly one target file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveSettings {
    values: BTreeMap<String, String>,
}

impl EffectiveSettings {
    /// Creates an empty settings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, overriding any previous value for the same key.
    ///
    /// Keys are lowercased; resolution order guarantees that later inserts
    /// come from closer `.editorconfig` files or later sections.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_lowercase(), value.to_string());
    }

    /// Returns the raw value for a key (case-insensitive), including `unset`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Returns the value for a key unless it is `unset`.
    fn enforced(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.eq_ignore_ascii_case("unset"))
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over raw key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The expected line-ending style, if enforced.
    pub fn end_of_line(&self) -> Option<EndOfLine> {
        self.parsed("end_of_line", EndOfLine::from_value)
    }

    /// The expected indentation style, if enforced.
    pub fn indent_style(&self) -> Option<IndentStyle> {
        self.parsed("indent_style", IndentStyle::from_value)
    }

    /// The indent size, if enforced.
    pub fn indent_size(&self) -> Option<IndentSize> {
        self.parsed("indent_size", |v| {
            if v.eq_ignore_ascii_case("tab") {
                Some(IndentSize::Tab)
            } else {
                v.parse().ok().map(IndentSize::Columns)
            }
        })
    }

    /// The raw `tab_width` property, if enforced and numeric.
    pub fn tab_width(&self) -> Option<usize> {
        self.parsed("tab_width", |v| v.parse().ok())
    }

    /// The tab display width after applying the defaulting rules:
    /// `tab_width` if set, else a numeric `indent_size`, else 4.
    pub fn resolved_tab_width(&self) -> usize {
        if let Some(width) = self.tab_width() {
            return width;
        }
        if let Some(IndentSize::Columns(n)) = self.indent_size() {
            return n;
        }
        DEFAULT_TAB_WIDTH
    }

    /// The indent width in columns: a numeric `indent_size`, or the resolved
    /// tab width when `indent_size = tab`.
    pub fn indent_width(&self) -> Option<usize> {
        match self.indent_size()? {
            IndentSize::Columns(n) => Some(n),
            IndentSize::Tab => Some(self.resolved_tab_width()),
        }
    }

    /// Whether trailing whitespace should be trimmed, if enforced.
    pub fn trim_trailing_whitespace(&self) -> Option<bool> {
        self.parsed("trim_trailing_whitespace", parse_bool)
    }

    /// Whether a final newline is required (`true`) or forbidden (`false`),
    /// if enforced.
    pub fn insert_final_newline(&self) -> Option<bool> {
        self.parsed("insert_final_newline", parse_bool)
    }

    /// The declared character set, if enforced.
    pub fn charset(&self) -> Option<Charset> {
        self.parsed("charset", Charset::from_value)
    }

    fn parsed<T>(&self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        let value = self.enforced(key)?;
        let parsed = parse(value);
        if parsed.is_none() {
            debug!("Ignoring unrecognized value '{}' for '{}'", value, key);
        }
        parsed
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
