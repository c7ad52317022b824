//! In-memory representation of a target file's contents.
//!
//! [`FileContent`] wraps the raw bytes of a file under inspection, detects a
//! leading byte order mark, and exposes a terminator-preserving line iterator
//! that the checks and the fixer share. Keeping terminators attached to the
//! line they end lets the same iteration drive both violation spans and
//! line-by-line rewriting.

use crate::parse::Span;

/// Byte order marks recognized at the start of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bom {
    /// EF BB BF.
    Utf8,
    /// FE FF.
    Utf16Be,
    /// FF FE.
    Utf16Le,
}

impl Bom {
    /// Detects a BOM at the start of the given bytes.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            Some(Self::Utf8)
        } else if bytes.starts_with(&[0xFE, 0xFF]) {
            Some(Self::Utf16Be)
        } else if bytes.starts_with(&[0xFF, 0xFE]) {
            Some(Self::Utf16Le)
        } else {
            None
        }
    }

    /// The byte sequence of this mark.
    pub fn bytes(&self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf16Le => &[0xFF, 0xFE],
        }
    }

    /// A human-readable name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8 BOM",
            Self::Utf16Be => "utf-16be BOM",
            Self::Utf16Le => "utf-16le BOM",
        }
    }
}

/// One line of a file, with its terminator kept separate from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Byte offset of the line start within the text (after any BOM).
    pub offset: usize,
    /// The line content, without its terminator.
    pub text: &'a str,
    /// The terminator that ended this line (`\n`, `\r\n`, or `\r`), or
    /// `None` for a final line with no trailing newline.
    pub terminator: Option<&'a str>,
}

impl Line<'_> {
    /// A span covering the full line text (terminator excluded).
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.number, 1, self.text.len())
    }

    /// A span covering `length` bytes starting at 1-based `column`.
    pub fn span_at(&self, column: usize, length: usize) -> Span {
        Span::new(self.offset + column - 1, self.number, column, length)
    }
}

/// The decoded contents of one target file.
#[derive(Debug, Clone)]
pub struct FileContent {
    bom: Option<Bom>,
    text: String,
}

impl FileContent {
    /// Builds a `FileContent` from raw file bytes.
    ///
    /// The text after an optional UTF-8 BOM must be valid UTF-8; files in
    /// other encodings (including UTF-16, whose BOM we can detect but whose
    /// body we do not decode) are rejected so checks never run over bytes
    /// they would misinterpret.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bom = Bom::detect(bytes);
        let body = match bom {
            Some(Bom::Utf8) => &bytes[3..],
            Some(_) => return None,
            None => bytes,
        };
        let text = std::str::from_utf8(body).ok()?;
        Some(Self {
            bom,
            text: text.to_string(),
        })
    }

    /// Builds a `FileContent` directly from text, with no BOM.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            bom: None,
            text: text.into(),
        }
    }

    /// The BOM found at the start of the file, if any.
    pub fn bom(&self) -> Option<Bom> {
        self.bom
    }

    /// The file text after any BOM.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the file is empty (ignoring any BOM).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over lines with their terminators. An empty file yields no
    /// lines; a trailing terminator does not produce an extra empty line.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            text: &self.text,
            offset: 0,
            number: 0,
        }
    }

    /// The terminator of the last terminated line, if any. Used to pick a
    /// newline sequence when `end_of_line` is not enforced.
    pub fn last_terminator(&self) -> Option<&str> {
        self.lines().filter_map(|line| line.terminator).last()
    }

    /// Re-encodes the content to bytes, restoring the original BOM.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.text.len() + 3);
        if let Some(bom) = self.bom {
            out.extend_from_slice(bom.bytes());
        }
        out.extend_from_slice(self.text.as_bytes());
        out
    }

    /// Returns a copy with the text replaced and the BOM preserved.
    pub fn with_text(&self, text: String) -> Self {
        Self {
            bom: self.bom,
            text,
        }
    }
}

/// Iterator over [`Line`]s of a [`FileContent`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    text: &'a str,
    offset: usize,
    number: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.text.is_empty() {
            return None;
        }
        self.number += 1;

        let (text, terminator) = match self.text.find(['\n', '\r']) {
            Some(pos) => {
                let text = &self.text[..pos];
                let rest = &self.text[pos..];
                let terminator = if rest.starts_with("\r\n") {
                    &rest[..2]
                } else {
                    &rest[..1]
                };
                (text, Some(terminator))
            }
            None => (self.text, None),
        };

        let line = Line {
            number: self.number,
            offset: self.offset,
            text,
            terminator,
        };

        let consumed = text.len() + terminator.map_or(0, str::len);
        self.offset += consumed;
        self.text = &self.text[consumed..];
        Some(line)
    }
}
