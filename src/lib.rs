//! keydiff - find missing translation keys.
//!
//! This library compares two localization files (JSON, YAML or TOML) and
//! reports which keys exist in one but not the other. Nested keys are
//! flattened into dotted paths such as `menu.file.open`, including the
//! intermediate `menu` and `menu.file`.
//!
//! # Example
//!
//! ```no_run
//! use keydiff_rs::{compare_files, format_report, CompareConfig, OutputFormat};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = compare_files(
//!     Path::new("languages/en.json"),
//!     Path::new("languages/fr.json"),
//!     &CompareConfig::default(),
//! )?;
//!
//! println!("{}", format_report(&report, &OutputFormat::Plain)?);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod error;
pub mod filter;
pub mod keys;
pub mod output;
pub mod parser;
pub mod tree;

// Re-export commonly used types for convenience
pub use compare::{
    compare_documents, compare_files, compare_keys, CompareConfig, ComparisonStats, KeyComparison,
};
pub use error::{ErrorKind, KeydiffError, OutputError, ParseError};
pub use filter::{filter_keys, FilterConfig, PathPattern};
pub use keys::{extract_keys, extract_keys_with, ExtractOptions, KeyPath, KeySet};
pub use output::{format_report, OutputFormat, Report};
pub use parser::{parse_content, parse_file, parse_json, parse_toml, parse_yaml, FormatHint};
pub use tree::{Document, Node};
