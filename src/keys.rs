//! Key path extraction.
//!
//! Flattens a document into the set of dotted key paths it defines. Every
//! object key is recorded, including intermediate ones, so `{"a": {"b": 1}}`
//! yields `a` and `a.b`. Arrays and scalars are leaves: their contents are
//! never addressed by key path.
//!
//! # Examples
//!
//! ```
//! use keydiff_rs::{extract_keys, parser::parse_content, FormatHint};
//!
//! let doc = parse_content(r#"{"a": {"b": 1, "c": [1, 2]}}"#, FormatHint::Json, "mem").unwrap();
//! let keys: Vec<String> = extract_keys(&doc).into_iter().collect();
//!
//! assert_eq!(keys, vec!["a", "a.b", "a.c"]);
//! ```

use crate::tree::{Document, Node};
use std::collections::{BTreeSet, HashMap};

/// A fully-qualified key, e.g. `menu.file.open`.
pub type KeyPath = String;

/// A sorted, duplicate-free set of key paths.
pub type KeySet = BTreeSet<KeyPath>;

pub const DEFAULT_SEPARATOR: &str = ".";

/// Options controlling how key paths are formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// String placed between nested key names
    pub separator: String,
    /// Skip keys whose value is a non-empty nested object
    pub leaves_only: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            leaves_only: false,
        }
    }
}

/// Extracts every key path of a document using the default options.
pub fn extract_keys(document: &Document) -> KeySet {
    extract_keys_with(document, &ExtractOptions::default())
}

/// Extracts every key path of a document.
pub fn extract_keys_with(document: &Document, options: &ExtractOptions) -> KeySet {
    extract_keys_with_prefix(document.root(), "", options)
}

/// Extracts the key paths of `map`, each prefixed by `prefix` when it is non-empty.
pub fn extract_keys_with_prefix(
    map: &HashMap<String, Node>,
    prefix: &str,
    options: &ExtractOptions,
) -> KeySet {
    let mut keys = KeySet::new();

    for (key, value) in map {
        let path = join_path(prefix, key, &options.separator);

        match value.as_object() {
            Some(nested) => {
                keys.extend(extract_keys_with_prefix(nested, &path, options));
                // An empty object has no leaves below it, so it counts as one.
                if !options.leaves_only || nested.is_empty() {
                    keys.insert(path);
                }
            }
            None => {
                keys.insert(path);
            }
        }
    }

    keys
}

fn join_path(prefix: &str, key: &str, separator: &str) -> KeyPath {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, separator, key)
    }
}

/// Splits a key path back into its segments.
pub fn split_path<'a>(path: &'a str, separator: &str) -> Vec<&'a str> {
    path.split(separator).collect()
}
