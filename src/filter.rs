//! Key path filtering.
//!
//! Glob-style patterns select which keys take part in a comparison, so that
//! sections that are intentionally untranslated can be ignored, or a check can
//! be narrowed to a single namespace.
//!
//! # Pattern Syntax
//!
//! - `foo` - matches literal segment "foo"
//! - `*` - matches any single key segment
//! - `**` - matches any number of key segments (including zero)
//! - `menu.file` - matches nested key "menu.file"
//! - `**.tooltip` - matches "tooltip" at any depth
//!
//! # Examples
//!
//! ```
//! use keydiff_rs::filter::PathPattern;
//!
//! let pattern = PathPattern::parse("menu.*");
//! assert!(pattern.matches(&["menu", "open"]));
//!
//! let pattern = PathPattern::parse("**.tooltip");
//! assert!(pattern.matches(&["toolbar", "save", "tooltip"]));
//! ```

use crate::keys::{split_path, KeySet, DEFAULT_SEPARATOR};

/// A single segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Matches an exact string
    Literal(String),
    /// Matches any single key segment (*)
    SingleWildcard,
    /// Matches any number of key segments (**)
    DoubleWildcard,
}

/// A compiled pattern for matching key paths.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pub segments: Vec<PatternSegment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        Self::parse_with_separator(pattern, DEFAULT_SEPARATOR)
    }

    pub fn parse_with_separator(pattern: &str, separator: &str) -> Self {
        let segments = pattern
            .split(separator)
            .map(|s| match s {
                "**" => PatternSegment::DoubleWildcard,
                "*" => PatternSegment::SingleWildcard,
                _ => PatternSegment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        matches_segments(&self.segments, path)
    }
}

fn matches_segments<S: AsRef<str>>(pattern: &[PatternSegment], path: &[S]) -> bool {
    match (pattern.first(), path.first()) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(_), None) => pattern
            .iter()
            .all(|s| matches!(s, PatternSegment::DoubleWildcard)),
        (Some(seg), Some(path_seg)) => match seg {
            PatternSegment::Literal(lit) => {
                let segment: &str = path_seg.as_ref();
                lit.as_str() == segment && matches_segments(&pattern[1..], &path[1..])
            }
            PatternSegment::SingleWildcard => matches_segments(&pattern[1..], &path[1..]),
            PatternSegment::DoubleWildcard => {
                matches_segments(&pattern[1..], path) || matches_segments(pattern, &path[1..])
            }
        },
    }
}

/// Which keys take part in a comparison.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Keys matching any of these are dropped
    pub ignore_patterns: Vec<PathPattern>,
    /// If non-empty, only keys matching one of these are kept
    pub only_patterns: Vec<PathPattern>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(mut self, pattern: &str) -> Self {
        self.ignore_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn only(mut self, pattern: &str) -> Self {
        self.only_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn has_filters(&self) -> bool {
        !self.ignore_patterns.is_empty() || !self.only_patterns.is_empty()
    }

    pub fn should_include<S: AsRef<str>>(&self, path: &[S]) -> bool {
        if self.ignore_patterns.iter().any(|p| p.matches(path)) {
            return false;
        }

        self.only_patterns.is_empty() || self.only_patterns.iter().any(|p| p.matches(path))
    }
}

/// Returns the keys of `keys` accepted by `config`.
pub fn filter_keys(keys: &KeySet, config: &FilterConfig, separator: &str) -> KeySet {
    if !config.has_filters() {
        return keys.clone();
    }

    keys.iter()
        .filter(|key| config.should_include(&split_path(key, separator)))
        .cloned()
        .collect()
}
