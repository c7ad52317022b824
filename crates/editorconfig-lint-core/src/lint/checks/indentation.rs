//! Indentation checks for `indent_style` and `indent_size`.

use super::{Check, CheckContext};
use crate::lint::violation::{LintResult, Violation};
use crate::properties::IndentStyle;

/// Inspects the leading whitespace of every line against `indent_style`
/// and `indent_size`.
///
/// Rules applied per line, first match wins:
/// - a tab after a space is mixed indentation, whatever the style;
/// - under `indent_style = space`, any leading tab is a style violation,
///   and a space count that is not a multiple of the indent width is a
///   width violation;
/// - under `indent_style = tab`, a run of leading spaces as wide as a full
///   tab stop is a style violation. Shorter runs after the tabs are
///   tolerated as alignment padding.
///
/// Whitespace-only lines are skipped; they carry no indentation intent and
/// are the trailing-whitespace check's business.
pub struct IndentationCheck;

struct Indent {
    tabs: usize,
    spaces: usize,
    tab_after_space: bool,
}

fn leading_indent(text: &str) -> Indent {
    let mut tabs = 0;
    let mut spaces = 0;
    let mut tab_after_space = false;
    for c in text.chars() {
        match c {
            '\t' => {
                if spaces > 0 {
                    tab_after_space = true;
                }
                tabs += 1;
            }
            ' ' => spaces += 1,
            _ => break,
        }
    }
    Indent {
        tabs,
        spaces,
        tab_after_space,
    }
}

impl Check for IndentationCheck {
    fn name(&self) -> &'static str {
        "indentation"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> LintResult {
        let mut result = LintResult::new();
        let style = ctx.settings.indent_style();
        let width = ctx.settings.indent_width();
        if style.is_none() && width.is_none() {
            return result;
        }
        let tab_width = ctx.settings.resolved_tab_width();

        for line in ctx.content.lines() {
            if line.text.trim().is_empty() {
                continue;
            }
            let indent = leading_indent(line.text);
            if indent.tabs == 0 && indent.spaces == 0 {
                continue;
            }
            let indent_len = indent.tabs + indent.spaces;
            let span = line.span_at(1, indent_len);

            if indent.tab_after_space {
                result.push(Violation::MixedIndentation { span });
                continue;
            }

            match style {
                Some(IndentStyle::Space) => {
                    if indent.tabs > 0 {
                        result.push(Violation::WrongIndentStyle {
                            expected: IndentStyle::Space,
                            span,
                        });
                        continue;
                    }
                    if let Some(width) = width
                        && width > 0
                        && indent.spaces % width != 0
                    {
                        result.push(Violation::WrongIndentWidth {
                            expected_width: width,
                            found_width: indent.spaces,
                            span,
                        });
                    }
                }
                Some(IndentStyle::Tab) => {
                    if indent.spaces >= tab_width && tab_width > 0 {
                        result.push(Violation::WrongIndentStyle {
                            expected: IndentStyle::Tab,
                            span,
                        });
                    }
                }
                None => {
                    // Only a width to enforce; tabs widths are opaque, so
                    // check pure-space indentation only.
                    if indent.tabs == 0
                        && let Some(width) = width
                        && width > 0
                        && indent.spaces % width != 0
                    {
                        result.push(Violation::WrongIndentWidth {
                            expected_width: width,
                            found_width: indent.spaces,
                            span,
                        });
                    }
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FileContent;
    use crate::properties::EffectiveSettings;

    fn run(text: &str, pairs: &[(&str, &str)]) -> LintResult {
        let content = FileContent::from_text(text);
        let mut settings = EffectiveSettings::new();
        for (k, v) in pairs {
            settings.insert(k, v);
        }
        IndentationCheck.check(&CheckContext {
            content: &content,
            settings: &settings,
        })
    }

    #[test]
    fn spaces_under_space_style_pass() {
        let result = run("fn x() {\n    body\n}\n", &[
            ("indent_style", "space"),
            ("indent_size", "4"),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn tab_under_space_style_is_flagged() {
        let result = run("\tbody\n", &[("indent_style", "space")]);
        assert_eq!(result.violations().len(), 1);
        assert!(matches!(
            result.violations()[0],
            Violation::WrongIndentStyle { .. }
        ));
    }

    #[test]
    fn wrong_width_is_flagged() {
        let result = run("   three\n", &[
            ("indent_style", "space"),
            ("indent_size", "4"),
        ]);
        assert!(matches!(
            result.violations()[0],
            Violation::WrongIndentWidth {
                expected_width: 4,
                found_width: 3,
                ..
            }
        ));
    }

    #[test]
    fn deeper_multiples_pass() {
        let result = run("        deep\n", &[
            ("indent_style", "space"),
            ("indent_size", "4"),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn tabs_under_tab_style_pass() {
        let result = run("\t\tbody\n", &[("indent_style", "tab")]);
        assert!(result.is_clean());
    }

    #[test]
    fn space_run_of_a_full_tab_stop_is_flagged() {
        let result = run("    body\n", &[
            ("indent_style", "tab"),
            ("tab_width", "4"),
        ]);
        assert_eq!(result.violations().len(), 1);
        assert!(matches!(
            result.violations()[0],
            Violation::WrongIndentStyle { .. }
        ));
    }

    #[test]
    fn short_alignment_padding_after_tabs_is_tolerated() {
        let result = run("\t\t  aligned\n", &[
            ("indent_style", "tab"),
            ("tab_width", "4"),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn tab_after_space_is_mixed() {
        let result = run("  \tbody\n", &[("indent_style", "tab")]);
        assert_eq!(result.violations().len(), 1);
        assert!(matches!(
            result.violations()[0],
            Violation::MixedIndentation { .. }
        ));
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        let result = run("   \n\t\n", &[
            ("indent_style", "space"),
            ("indent_size", "4"),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn unindented_lines_are_skipped() {
        let result = run("top\nlevel\n", &[("indent_style", "tab")]);
        assert!(result.is_clean());
    }

    #[test]
    fn width_only_checks_pure_space_lines() {
        let result = run("\tbody\n   odd\n", &[("indent_size", "4")]);
        assert_eq!(result.violations().len(), 1);
        assert_eq!(result.violations()[0].line(), 2);
    }

    #[test]
    fn indent_size_tab_uses_tab_width_as_width() {
        let result = run("        ok\n", &[
            ("indent_style", "space"),
            ("indent_size", "tab"),
            ("tab_width", "8"),
        ]);
        assert!(result.is_clean());
    }
}
