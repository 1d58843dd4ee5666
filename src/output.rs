//! Rendering comparison reports.
//!
//! The plain format lists the keys missing from each file under a
//! `Keys missing in <file>:` header, sorted, one per line, or prints
//! `Both files have the same keys.` when there is nothing to report.
//! The terminal format is the same text with colors, and the JSON format is
//! meant for scripts and CI.
//!
//! # Examples
//!
//! ```
//! use keydiff_rs::{compare_keys, format_report, KeySet, OutputFormat, Report};
//!
//! let en: KeySet = ["a", "a.b", "a.c"].iter().map(|s| s.to_string()).collect();
//! let fr: KeySet = ["a", "a.b"].iter().map(|s| s.to_string()).collect();
//! let report = Report::new("en.json", "fr.json", compare_keys(&en, &fr));
//!
//! let output = format_report(&report, &OutputFormat::Plain).unwrap();
//! assert_eq!(output, "Keys missing in fr.json:\na.c");
//! ```

use crate::compare::KeyComparison;
use crate::error::OutputError;
use crate::keys::KeySet;
use colored::*;
use serde::Serialize;
use std::path::Path;

pub const SAME_KEYS_MESSAGE: &str = "Both files have the same keys.";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, no colors (suitable for piping)
    Plain,
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the report
    Json,
}

/// A comparison together with the names of the two files it came from.
#[derive(Debug, Clone)]
pub struct Report {
    pub source_label: String,
    pub target_label: String,
    pub comparison: KeyComparison,
}

impl Report {
    pub fn new(
        source_label: impl Into<String>,
        target_label: impl Into<String>,
        comparison: KeyComparison,
    ) -> Self {
        Self {
            source_label: source_label.into(),
            target_label: target_label.into(),
            comparison,
        }
    }

    /// Builds a report labelled with the file names of the two inputs.
    pub fn for_paths(source: &Path, target: &Path, comparison: KeyComparison) -> Self {
        Self::new(label_for(source), label_for(target), comparison)
    }
}

/// Short name used for a file in report headers, e.g. `fr.json`.
pub fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Formats a report in the requested format.
pub fn format_report(report: &Report, format: &OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Plain => Ok(format_plain(report)),
        OutputFormat::Terminal => Ok(format_terminal(report)),
        OutputFormat::Json => format_json(report),
    }
}

fn format_plain(report: &Report) -> String {
    let comparison = &report.comparison;
    if comparison.is_empty() {
        return SAME_KEYS_MESSAGE.to_string();
    }

    let mut lines = Vec::new();
    if !comparison.only_in_source.is_empty() {
        lines.push(missing_header(&report.target_label));
        lines.extend(comparison.only_in_source.iter().cloned());
    }
    if !comparison.only_in_target.is_empty() {
        // The blank separator line is printed even when the first section is absent.
        lines.push(String::new());
        lines.push(missing_header(&report.source_label));
        lines.extend(comparison.only_in_target.iter().cloned());
    }

    lines.join("\n")
}

/// Same layout as the plain format with ANSI colors.
fn format_terminal(report: &Report) -> String {
    let comparison = &report.comparison;
    if comparison.is_empty() {
        return SAME_KEYS_MESSAGE.green().to_string();
    }

    let mut lines = Vec::new();
    if !comparison.only_in_source.is_empty() {
        lines.push(missing_header(&report.target_label).bold().to_string());
        lines.extend(
            comparison
                .only_in_source
                .iter()
                .map(|key| key.red().to_string()),
        );
    }
    if !comparison.only_in_target.is_empty() {
        lines.push(String::new());
        lines.push(missing_header(&report.source_label).bold().to_string());
        lines.extend(
            comparison
                .only_in_target
                .iter()
                .map(|key| key.yellow().to_string()),
        );
    }

    lines.join("\n")
}

fn missing_header(label: &str) -> String {
    format!("Keys missing in {}:", label)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    target: &'a str,
    missing_in_target: &'a KeySet,
    missing_in_source: &'a KeySet,
    stats: &'a crate::compare::ComparisonStats,
}

fn format_json(report: &Report) -> Result<String, OutputError> {
    let json = JsonReport {
        source: &report.source_label,
        target: &report.target_label,
        missing_in_target: &report.comparison.only_in_source,
        missing_in_source: &report.comparison.only_in_target,
        stats: report.comparison.stats(),
    };

    serde_json::to_string_pretty(&json)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}
