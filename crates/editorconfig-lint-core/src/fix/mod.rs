//! Automatic rewriting of files to satisfy their effective settings.
//!
//! The fixer reuses the same line iteration as the checks and rewrites one
//! line at a time: terminators are replaced, trailing whitespace trimmed,
//! and leading whitespace re-emitted in the declared indent style by way of
//! its visual column width. Running the fixer a second time over its own
//! output produces no further changes.
//!
//! Not everything is fixable. A space indent whose width is not a multiple
//! of the indent width has no unambiguous correction, and charset mismatches
//! would require transcoding; these are reported back as unfixable
//! violations instead of being guessed at.

use crate::content::{FileContent, Line};
use crate::lint::{Check, CheckContext, CharsetCheck, Violation};
use crate::properties::{EffectiveSettings, EndOfLine, IndentStyle};
use log::debug;

/// The result of fixing one file.
#[derive(Debug)]
pub struct FixOutcome {
    /// The rewritten contents (BOM preserved).
    pub content: FileContent,
    /// True if the rewritten contents differ from the input.
    pub changed: bool,
    /// Violations that remain because no safe rewrite exists.
    pub unfixable: Vec<Violation>,
}

/// Rewrites `content` to satisfy `settings` as far as safely possible.
pub fn fix(content: &FileContent, settings: &EffectiveSettings) -> FixOutcome {
    let eol = settings.end_of_line();
    let trim = settings.trim_trailing_whitespace() == Some(true);
    let style = settings.indent_style();
    let indent_width = settings.indent_width();
    let tab_width = settings.resolved_tab_width();

    let mut unfixable = Vec::new();
    let mut out = String::with_capacity(content.text().len() + 1);

    for line in content.lines() {
        let trimmed = if trim {
            line.text.trim_end_matches([' ', '\t'])
        } else {
            line.text
        };

        if trimmed.trim().is_empty() {
            // Whitespace-only lines carry no indentation intent.
            out.push_str(trimmed);
        } else {
            match style {
                Some(style) => out.push_str(&reindent(
                    trimmed,
                    style,
                    tab_width,
                    indent_width,
                    &line,
                    &mut unfixable,
                )),
                None => {
                    report_width_only(trimmed, indent_width, &line, &mut unfixable);
                    out.push_str(trimmed);
                }
            }
        }

        if let Some(terminator) = line.terminator {
            out.push_str(eol.map_or(terminator, |e| e.terminator()));
        }
    }

    match settings.insert_final_newline() {
        Some(true) if !out.is_empty() && !out.ends_with(['\n', '\r']) => {
            let terminator = eol
                .map(|e| e.terminator())
                .or_else(|| content.last_terminator())
                .unwrap_or("\n");
            out.push_str(terminator);
        }
        Some(false) => {
            let kept = out.trim_end_matches(['\n', '\r']).len();
            out.truncate(kept);
        }
        _ => {}
    }

    // Charset mismatches need transcoding, which we never attempt.
    let charset_result = CharsetCheck.check(&CheckContext {
        content,
        settings,
    });
    unfixable.extend(charset_result.into_violations());

    let changed = out != content.text();
    if changed {
        debug!("Fix rewrote content ({} unfixable)", unfixable.len());
    }
    FixOutcome {
        content: content.with_text(out),
        changed,
        unfixable,
    }
}

/// Splits a line into its leading whitespace and the rest.
fn split_indent(text: &str) -> (&str, &str) {
    let body_start = text.len() - text.trim_start_matches([' ', '\t']).len();
    text.split_at(body_start)
}

/// The column width of a whitespace run, with tabs advancing to the next
/// tab stop.
fn visual_width(lead: &str, tab_width: usize) -> usize {
    let mut col = 0;
    for c in lead.chars() {
        match c {
            '\t' if tab_width > 0 => col = (col / tab_width + 1) * tab_width,
            _ => col += 1,
        }
    }
    col
}

/// Re-emits the leading whitespace of one line in the target style,
/// preserving its visual width.
fn reindent(
    text: &str,
    style: IndentStyle,
    tab_width: usize,
    indent_width: Option<usize>,
    line: &Line<'_>,
    unfixable: &mut Vec<Violation>,
) -> String {
    let (lead, body) = split_indent(text);
    if lead.is_empty() {
        return text.to_string();
    }
    let width = visual_width(lead, tab_width);

    let new_lead = match style {
        IndentStyle::Space => {
            if let Some(expected_width) = indent_width
                && expected_width > 0
                && width % expected_width != 0
            {
                unfixable.push(Violation::WrongIndentWidth {
                    expected_width,
                    found_width: width,
                    span: line.span_at(1, lead.len()),
                });
            }
            " ".repeat(width)
        }
        IndentStyle::Tab => {
            if tab_width == 0 {
                return text.to_string();
            }
            let mut s = "\t".repeat(width / tab_width);
            s.push_str(&" ".repeat(width % tab_width));
            s
        }
    };

    let mut rebuilt = new_lead;
    rebuilt.push_str(body);
    rebuilt
}

/// With only an indent width to enforce, nothing is rewritten: there is no
/// target style to convert to. Violations the checker would still raise on
/// such lines (wrong pure-space widths, tabs after spaces) are reported as
/// unfixable instead of being dropped.
fn report_width_only(
    text: &str,
    indent_width: Option<usize>,
    line: &Line<'_>,
    unfixable: &mut Vec<Violation>,
) {
    let (lead, _) = split_indent(text);
    if lead.is_empty() {
        return;
    }
    let span = line.span_at(1, lead.len());

    if lead.trim_start_matches('\t').contains('\t') {
        // A tab after a space; matches the checker's mixed-indentation rule.
        unfixable.push(Violation::MixedIndentation { span });
        return;
    }
    if lead.contains('\t') {
        // Tab-led indentation has an opaque width; the checker skips it too.
        return;
    }
    if let Some(expected_width) = indent_width
        && expected_width > 0
        && lead.len() % expected_width != 0
    {
        unfixable.push(Violation::WrongIndentWidth {
            expected_width,
            found_width: lead.len(),
            span,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::CheckRunner;

    fn settings(pairs: &[(&str, &str)]) -> EffectiveSettings {
        let mut s = EffectiveSettings::new();
        for (k, v) in pairs {
            s.insert(k, v);
        }
        s
    }

    fn fix_text(text: &str, pairs: &[(&str, &str)]) -> FixOutcome {
        fix(&FileContent::from_text(text), &settings(pairs))
    }

    #[test]
    fn line_endings_are_rewritten() {
        let outcome = fix_text("a\r\nb\r\n", &[("end_of_line", "lf")]);
        assert!(outcome.changed);
        assert_eq!(outcome.content.text(), "a\nb\n");
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let outcome = fix_text("a  \nb\t\n", &[("trim_trailing_whitespace", "true")]);
        assert_eq!(outcome.content.text(), "a\nb\n");
    }

    #[test]
    fn final_newline_is_appended() {
        let outcome = fix_text("a\nb", &[("insert_final_newline", "true")]);
        assert_eq!(outcome.content.text(), "a\nb\n");
    }

    #[test]
    fn appended_newline_uses_declared_eol() {
        let outcome = fix_text("a", &[
            ("insert_final_newline", "true"),
            ("end_of_line", "crlf"),
        ]);
        assert_eq!(outcome.content.text(), "a\r\n");
    }

    #[test]
    fn appended_newline_follows_existing_style_without_eol() {
        let outcome = fix_text("a\r\nb", &[("insert_final_newline", "true")]);
        assert_eq!(outcome.content.text(), "a\r\nb\r\n");
    }

    #[test]
    fn trailing_newlines_are_stripped() {
        let outcome = fix_text("a\n\n\n", &[("insert_final_newline", "false")]);
        assert_eq!(outcome.content.text(), "a");
    }

    #[test]
    fn empty_file_is_untouched() {
        let outcome = fix_text("", &[
            ("insert_final_newline", "true"),
            ("end_of_line", "lf"),
        ]);
        assert!(!outcome.changed);
        assert_eq!(outcome.content.text(), "");
    }

    #[test]
    fn tabs_become_spaces() {
        let outcome = fix_text("\tx\n\t\ty\n", &[
            ("indent_style", "space"),
            ("indent_size", "4"),
        ]);
        assert_eq!(outcome.content.text(), "    x\n        y\n");
        assert!(outcome.unfixable.is_empty());
    }

    #[test]
    fn spaces_become_tabs_with_remainder() {
        let outcome = fix_text("        x\n      y\n", &[
            ("indent_style", "tab"),
            ("tab_width", "4"),
        ]);
        assert_eq!(outcome.content.text(), "\t\tx\n\t  y\n");
    }

    #[test]
    fn mixed_indentation_is_normalized() {
        let outcome = fix_text("  \tx\n", &[
            ("indent_style", "tab"),
            ("tab_width", "4"),
        ]);
        // Two spaces then a tab reach column 4: one full tab stop.
        assert_eq!(outcome.content.text(), "\tx\n");
    }

    #[test]
    fn odd_width_is_unfixable() {
        let outcome = fix_text("   x\n", &[
            ("indent_style", "space"),
            ("indent_size", "4"),
        ]);
        assert!(!outcome.changed);
        assert_eq!(outcome.unfixable.len(), 1);
        assert!(matches!(
            outcome.unfixable[0],
            Violation::WrongIndentWidth {
                expected_width: 4,
                found_width: 3,
                ..
            }
        ));
    }

    #[test]
    fn mixed_indent_without_style_is_reported_unfixable() {
        // With only a width to enforce there is no target style, so the
        // checker's mixed-indentation finding must survive as unfixable
        // rather than vanish from the fix report.
        let props = [("indent_size", "4")];
        let outcome = fix_text("  \tx\n", &props);
        assert!(!outcome.changed);
        assert_eq!(outcome.unfixable.len(), 1);
        assert!(matches!(
            outcome.unfixable[0],
            Violation::MixedIndentation { .. }
        ));

        // Tab-led indentation stays exempt, as in the checker.
        let outcome = fix_text("\t  x\n", &props);
        assert!(!outcome.changed);
        assert!(outcome.unfixable.is_empty());
    }

    #[test]
    fn charset_mismatch_is_unfixable() {
        let outcome = fix_text("x\n", &[("charset", "utf-8-bom")]);
        assert!(!outcome.changed);
        assert!(matches!(
            outcome.unfixable[0],
            Violation::CharsetMismatch { .. }
        ));
    }

    #[test]
    fn fix_is_idempotent() {
        let props = [
            ("end_of_line", "lf"),
            ("trim_trailing_whitespace", "true"),
            ("insert_final_newline", "true"),
            ("indent_style", "tab"),
            ("tab_width", "4"),
        ];
        let first = fix_text("   a \r\n      b\r\nc", &props);
        assert!(first.changed);
        let second = fix(&first.content, &settings(&props));
        assert!(!second.changed);
        assert_eq!(second.content.text(), first.content.text());
    }

    #[test]
    fn fixed_output_passes_the_checks() {
        let props = [
            ("end_of_line", "lf"),
            ("trim_trailing_whitespace", "true"),
            ("insert_final_newline", "true"),
            ("indent_style", "space"),
            ("indent_size", "4"),
        ];
        let outcome = fix_text("\tx \r\n\t\ty\r\nz", &props);
        assert!(outcome.unfixable.is_empty());

        let s = settings(&props);
        let result = CheckRunner::with_all_checks().run(&CheckContext {
            content: &outcome.content,
            settings: &s,
        });
        assert!(result.is_clean(), "{:?}", result.violations());
    }

    #[test]
    fn bom_survives_fixing() {
        let content = FileContent::from_bytes(&[0xEF, 0xBB, 0xBF, b'a']).unwrap();
        let outcome = fix(
            &content,
            &settings(&[("insert_final_newline", "true")]),
        );
        assert_eq!(outcome.content.to_bytes(), vec![0xEF, 0xBB, 0xBF, b'a', b'\n']);
    }

    #[test]
    fn whitespace_only_lines_are_not_reindented() {
        let outcome = fix_text("a\n   \nb\n", &[
            ("indent_style", "tab"),
            ("tab_width", "2"),
        ]);
        assert_eq!(outcome.content.text(), "a\n   \nb\n");
        assert!(!outcome.changed);
    }
}
