//! Byte-order-mark heuristic for the `charset` property.

use super::{Check, CheckContext};
use crate::content::Bom;
use crate::lint::violation::{LintResult, Violation};
use crate::parse::Span;
use crate::properties::Charset;

/// Compares the file's byte order mark against the declared `charset`.
///
/// This is a heuristic: without full decoding we can only say whether the
/// BOM (or its absence) is consistent with the declaration, so mismatches
/// report at warning severity. `utf-8` and `latin1` files must carry no
/// BOM; the BOM-bearing charsets must carry theirs.
pub struct CharsetCheck;

/// The BOM a charset declaration implies, if any.
fn expected_bom(charset: Charset) -> Option<Bom> {
    match charset {
        Charset::Latin1 | Charset::Utf8 => None,
        Charset::Utf8Bom => Some(Bom::Utf8),
        Charset::Utf16Be => Some(Bom::Utf16Be),
        Charset::Utf16Le => Some(Bom::Utf16Le),
    }
}

impl Check for CharsetCheck {
    fn name(&self) -> &'static str {
        "charset"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> LintResult {
        let mut result = LintResult::new();
        let Some(expected) = ctx.settings.charset() else {
            return result;
        };

        let found = ctx.content.bom();
        if found != expected_bom(expected) {
            result.push(Violation::CharsetMismatch {
                expected,
                found: found.map_or("no BOM", |b| b.name()).to_string(),
                span: Span::point(0, 1, 1),
            });
        }
        result
    }
}
