//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for check
//! and fix results.

use colored::Colorize;
use editorconfig_lint_core::lint::{Severity, Violation};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON output format for a whole run.
#[derive(Debug, Default, Serialize)]
pub struct JsonOutput {
    /// Per-file issues, only files with at least one issue.
    pub files: Vec<JsonFile>,
    /// Files that could not be processed at all.
    pub failures: Vec<JsonFailure>,
    /// Files rewritten by `--fix`.
    pub fixed: Vec<String>,
}

impl JsonOutput {
    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Issues for one file in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonFile {
    pub path: String,
    pub issues: Vec<JsonIssue>,
}

/// A single issue in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    /// The EditorConfig property the issue is checked against.
    pub property: String,
    /// What the effective settings expected.
    pub expected: String,
    /// What was found in the file.
    pub observed: String,
    /// Line number where the issue occurred.
    pub line: usize,
    /// Column number where the issue occurred.
    pub column: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity of the issue.
    pub severity: Severity,
}

impl From<&Violation> for JsonIssue {
    fn from(violation: &Violation) -> Self {
        let span = violation.span();
        Self {
            property: violation.property().to_string(),
            expected: violation.expected(),
            observed: violation.observed(),
            line: span.line,
            column: span.column,
            message: violation.to_string(),
            severity: violation.severity(),
        }
    }
}

/// A file the run had to give up on, in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonFailure {
    pub path: String,
    pub message: String,
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for one file.
    pub fn write_file_header(&mut self, path: &Path) -> std::io::Result<()> {
        let header = format!("==> {}", path.display());
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes a single violation.
    pub fn write_issue(&mut self, violation: &Violation) -> std::io::Result<()> {
        let severity = violation.severity();
        let location = format!("{}:{}", violation.line(), violation.span().column);

        let label = match severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };

        if self.use_colors {
            let colored_label = match severity {
                Severity::Error => format!("[{}]", label).red().bold(),
                Severity::Warning => format!("[{}]", label).yellow().bold(),
            };
            writeln!(
                self.writer,
                "  {} {} {} ({})",
                colored_label,
                location.dimmed(),
                violation,
                violation.property()
            )?;
        } else {
            writeln!(
                self.writer,
                "  [{}] {} {} ({})",
                label,
                location,
                violation,
                violation.property()
            )?;
        }

        Ok(())
    }

    /// Writes a per-file processing failure.
    pub fn write_failure(&mut self, path: &Path, message: &str) -> std::io::Result<()> {
        self.write_file_header(path)?;
        if self.use_colors {
            writeln!(self.writer, "  {} {}", "[ERROR]".red().bold(), message)?;
        } else {
            writeln!(self.writer, "  [ERROR] {}", message)?;
        }
        Ok(())
    }

    /// Writes the run summary.
    pub fn write_summary(
        &mut self,
        files_checked: usize,
        files_fixed: usize,
        total_errors: usize,
        total_warnings: usize,
    ) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if files_fixed > 0 {
            let message = format!("Fixed {} file(s)", files_fixed);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        if total_errors == 0 && total_warnings == 0 {
            let message = format!("✓ {} file(s) comply with .editorconfig", files_checked);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ Found {} error(s) and {} warning(s) in {} file(s)",
                total_errors, total_warnings, files_checked
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

/// Collects the outcome of one run, in file order.
#[derive(Debug, Default)]
pub struct RunResults {
    files: Vec<(PathBuf, Vec<Violation>)>,
    failures: Vec<(PathBuf, String)>,
    fixed: Vec<PathBuf>,
    files_checked: usize,
}

impl RunResults {
    /// Creates an empty results collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the violations found in one file.
    pub fn add_report(&mut self, path: PathBuf, violations: Vec<Violation>) {
        self.files_checked += 1;
        if !violations.is_empty() {
            self.files.push((path, violations));
        }
    }

    /// Records a file that could not be processed.
    pub fn add_failure(&mut self, path: PathBuf, message: String) {
        self.failures.push((path, message));
    }

    /// Records a file rewritten by `--fix`.
    pub fn add_fixed(&mut self, path: PathBuf) {
        self.fixed.push(path);
    }

    /// Total error-severity violations; processing failures count as errors.
    pub fn total_errors(&self) -> usize {
        let violations: usize = self
            .files
            .iter()
            .flat_map(|(_, v)| v)
            .filter(|v| v.severity() == Severity::Error)
            .count();
        violations + self.failures.len()
    }

    /// Total warning-severity violations.
    pub fn total_warnings(&self) -> usize {
        self.files
            .iter()
            .flat_map(|(_, v)| v)
            .filter(|v| v.severity() == Severity::Warning)
            .count()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.total_warnings() > 0
    }

    /// Number of files rewritten.
    pub fn files_fixed(&self) -> usize {
        self.fixed.len()
    }

    /// Writes results in human-readable format.
    pub fn write_human<W: Write>(&self, writer: &mut W, use_colors: bool) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors);

        for (path, violations) in &self.files {
            output.write_file_header(path)?;
            for violation in violations {
                output.write_issue(violation)?;
            }
        }

        for (path, message) in &self.failures {
            output.write_failure(path, message)?;
        }

        output.write_summary(
            self.files_checked,
            self.files_fixed(),
            self.total_errors(),
            self.total_warnings(),
        )?;

        Ok(())
    }

    /// Writes results in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json_output = JsonOutput {
            files: self
                .files
                .iter()
                .map(|(path, violations)| JsonFile {
                    path: path.display().to_string(),
                    issues: violations.iter().map(JsonIssue::from).collect(),
                })
                .collect(),
            failures: self
                .failures
                .iter()
                .map(|(path, message)| JsonFailure {
                    path: path.display().to_string(),
                    message: message.clone(),
                })
                .collect(),
            fixed: self.fixed.iter().map(|p| p.display().to_string()).collect(),
        };

        json_output.write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editorconfig_lint_core::parse::Span;
    use editorconfig_lint_core::properties::EndOfLine;

    fn test_violation() -> Violation {
        Violation::WrongLineEnding {
            expected: EndOfLine::Lf,
            found: "\r\n".to_string(),
            span: Span::new(5, 2, 6, 2),
        }
    }

    #[test]
    fn test_json_issue_from_violation() {
        let issue = JsonIssue::from(&test_violation());
        assert_eq!(issue.property, "end_of_line");
        assert_eq!(issue.expected, "lf");
        assert_eq!(issue.observed, "crlf");
        assert_eq!(issue.line, 2);
        assert_eq!(issue.column, 6);
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_json_output_serialize() {
        let mut results = RunResults::new();
        results.add_report(PathBuf::from("a.txt"), vec![test_violation()]);
        results.add_report(PathBuf::from("clean.txt"), vec![]);
        results.add_failure(PathBuf::from("bad.bin"), "not valid UTF-8".to_string());

        let mut buf = Vec::new();
        results.write_json(&mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["files"].as_array().unwrap().len(), 1);
        assert_eq!(json["files"][0]["path"], "a.txt");
        assert_eq!(json["files"][0]["issues"][0]["property"], "end_of_line");
        assert_eq!(json["failures"].as_array().unwrap().len(), 1);
        assert!(json["fixed"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_human_output_no_colors() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output.write_issue(&test_violation()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("[ERROR]"));
        assert!(text.contains("2:6"));
        assert!(text.contains("end_of_line"));
    }

    #[test]
    fn test_summary_counts() {
        let mut results = RunResults::new();
        results.add_report(PathBuf::from("a.txt"), vec![test_violation()]);
        results.add_failure(PathBuf::from("bad.bin"), "unreadable".to_string());

        // The failure counts as an error alongside the violation.
        assert_eq!(results.total_errors(), 2);
        assert_eq!(results.total_warnings(), 0);
        assert!(results.has_errors());
    }

    #[test]
    fn test_clean_summary() {
        let mut results = RunResults::new();
        results.add_report(PathBuf::from("a.txt"), vec![]);

        let mut buf = Vec::new();
        results.write_human(&mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1 file(s) comply"));
    }

    #[test]
    fn test_fixed_files_reported() {
        let mut results = RunResults::new();
        results.add_report(PathBuf::from("a.txt"), vec![]);
        results.add_fixed(PathBuf::from("a.txt"));

        let mut buf = Vec::new();
        results.write_human(&mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Fixed 1 file(s)"));
    }
}
