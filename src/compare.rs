//! Key set comparison.
//!
//! Compares the key paths of two documents in both directions. The side the
//! user names first is the *source*, the other is the *target*: keys present
//! only in the source are missing from the target, and vice versa.
//!
//! # Examples
//!
//! ```
//! use keydiff_rs::{compare_keys, KeySet};
//!
//! let en: KeySet = ["a", "a.b", "a.c"].iter().map(|s| s.to_string()).collect();
//! let fr: KeySet = ["a", "a.b"].iter().map(|s| s.to_string()).collect();
//!
//! let comparison = compare_keys(&en, &fr);
//! assert!(comparison.only_in_source.contains("a.c"));
//! assert!(comparison.only_in_target.is_empty());
//! ```

use crate::error::KeydiffError;
use crate::filter::{filter_keys, FilterConfig};
use crate::keys::{extract_keys_with, ExtractOptions, KeySet};
use crate::output::Report;
use crate::parser::parse_file;
use crate::tree::Document;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Result of comparing two key sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyComparison {
    /// Keys present in the source but not in the target
    pub only_in_source: KeySet,
    /// Keys present in the target but not in the source
    pub only_in_target: KeySet,
    stats: ComparisonStats,
}

impl KeyComparison {
    /// Returns true if both documents define exactly the same keys.
    pub fn is_empty(&self) -> bool {
        self.only_in_source.is_empty() && self.only_in_target.is_empty()
    }

    pub fn stats(&self) -> &ComparisonStats {
        &self.stats
    }
}

/// Counts describing a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonStats {
    pub source_keys: usize,
    pub target_keys: usize,
    pub shared: usize,
    pub missing_in_target: usize,
    pub missing_in_source: usize,
}

/// Configuration for comparing two documents.
#[derive(Debug, Clone, Default)]
pub struct CompareConfig {
    pub extract: ExtractOptions,
    pub filter: FilterConfig,
}

/// Computes the set differences between two key sets in both directions.
pub fn compare_keys(source: &KeySet, target: &KeySet) -> KeyComparison {
    let only_in_source: KeySet = source.difference(target).cloned().collect();
    let only_in_target: KeySet = target.difference(source).cloned().collect();

    let stats = ComparisonStats {
        source_keys: source.len(),
        target_keys: target.len(),
        shared: source.len() - only_in_source.len(),
        missing_in_target: only_in_source.len(),
        missing_in_source: only_in_target.len(),
    };

    KeyComparison {
        only_in_source,
        only_in_target,
        stats,
    }
}

/// Extracts, filters and compares the keys of two documents.
pub fn compare_documents(
    source: &Document,
    target: &Document,
    config: &CompareConfig,
) -> KeyComparison {
    let separator = &config.extract.separator;

    let source_keys = extract_keys_with(source, &config.extract);
    let target_keys = extract_keys_with(target, &config.extract);
    debug!(
        source = source_keys.len(),
        target = target_keys.len(),
        "extracted key paths"
    );

    let source_keys = filter_keys(&source_keys, &config.filter, separator);
    let target_keys = filter_keys(&target_keys, &config.filter, separator);
    if config.filter.has_filters() {
        debug!(
            source = source_keys.len(),
            target = target_keys.len(),
            "applied key filters"
        );
    }

    let comparison = compare_keys(&source_keys, &target_keys);
    debug!(stats = ?comparison.stats(), "compared key sets");
    comparison
}

/// Loads both files and compares their keys.
///
/// Both files are loaded before anything is compared, so a failure on either
/// side produces no partial report.
pub fn compare_files(
    source: &Path,
    target: &Path,
    config: &CompareConfig,
) -> Result<Report, KeydiffError> {
    info!(path = %source.display(), "loading source");
    let source_doc = parse_file(source)?;
    info!(path = %target.display(), "loading target");
    let target_doc = parse_file(target)?;

    let comparison = compare_documents(&source_doc, &target_doc, config);
    Ok(Report::for_paths(source, target, comparison))
}
