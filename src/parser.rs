//! Loading localization files from JSON, YAML and TOML.
//!
//! Files are parsed into the [`Node`] tree and the root is checked to be a
//! key-value map before it is handed out as a [`Document`]. The format is
//! detected by file extension; files with an unknown or missing extension are
//! tried as JSON, then TOML, then YAML.
//!
//! # Examples
//!
//! ```no_run
//! use keydiff_rs::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let en = parse_file(Path::new("languages/en.json"))?;
//! let fr = parse_file(Path::new("languages/fr.yaml"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::tree::{Document, Node};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Serialization format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Json,
    Yaml,
    Toml,
    /// Try every supported format in turn
    Auto,
}

impl FormatHint {
    /// Detects the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("json") => FormatHint::Json,
            Some("yaml") | Some("yml") => FormatHint::Yaml,
            Some("toml") => FormatHint::Toml,
            _ => FormatHint::Auto,
        }
    }
}

/// Loads a localization file into a [`Document`].
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read, including non-UTF-8 content (`ParseError::ReadError`)
/// - The file is not valid JSON, YAML or TOML (`JsonError`, `YamlError`, `TomlError`)
/// - No supported format accepts a file with an unknown extension (`ParseError::UnknownFormat`)
/// - The top-level value is not a key-value map (`ParseError::NotAnObject`)
pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    let origin = path.to_string_lossy().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ParseError::file_not_found(origin.clone()),
        _ => ParseError::read_error(origin.clone(), e),
    })?;

    let hint = FormatHint::from_path(path);
    debug!(path = %origin, format = ?hint, bytes = content.len(), "loading document");

    parse_content(&content, hint, &origin)
}

/// Parses already-read content into a [`Document`].
///
/// `origin` is only used to label errors.
pub fn parse_content(content: &str, hint: FormatHint, origin: &str) -> Result<Document, ParseError> {
    let node = match hint {
        FormatHint::Json => parse_json(content).map_err(|e| ParseError::json_error(origin, e))?,
        FormatHint::Yaml => parse_yaml(content).map_err(|e| ParseError::yaml_error(origin, e))?,
        FormatHint::Toml => parse_toml(content).map_err(|e| ParseError::toml_error(origin, e))?,
        FormatHint::Auto => return parse_any(content, origin),
    };

    into_document(node, origin)
}

/// Tries JSON, TOML and YAML in that order and keeps the first one yielding a map.
///
/// YAML goes last because almost any text is a valid YAML scalar.
fn parse_any(content: &str, origin: &str) -> Result<Document, ParseError> {
    let parsers: [fn(&str) -> Option<Node>; 3] = [
        |c| parse_json(c).ok(),
        |c| parse_toml(c).ok(),
        |c| parse_yaml(c).ok(),
    ];

    let mut first_parsed: Option<Node> = None;
    for node in parsers.iter().filter_map(|parse| parse(content)) {
        match Document::from_node(node) {
            Ok(document) => return Ok(document),
            Err(node) => {
                first_parsed.get_or_insert(node);
            }
        }
    }

    match first_parsed {
        Some(node) => Err(ParseError::not_an_object(origin, node.type_name())),
        None => Err(ParseError::unknown_format(origin)),
    }
}

fn into_document(node: Node, origin: &str) -> Result<Document, ParseError> {
    Document::from_node(node).map_err(|node| ParseError::not_an_object(origin, node.type_name()))
}

/// Parses a JSON string into a Node.
///
/// ```
/// use keydiff_rs::parser::parse_json;
///
/// let node = parse_json(r#"{"greeting": {"hello": "Hello"}}"#).unwrap();
/// assert_eq!(node.type_name(), "object");
/// ```
pub fn parse_json(content: &str) -> Result<Node, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_node(value))
}

/// Parses a YAML string into a Node.
pub fn parse_yaml(content: &str) -> Result<Node, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_node(value))
}

/// Parses a TOML document into a Node. The result is always an object.
pub fn parse_toml(content: &str) -> Result<Node, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(toml_to_node(toml::Value::Table(table)))
}

fn json_to_node(value: serde_json::Value) -> Node {
    match value {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => Node::Number(n.as_f64().unwrap_or_default()),
        serde_json::Value::String(s) => Node::String(s),
        serde_json::Value::Array(arr) => Node::Array(arr.into_iter().map(json_to_node).collect()),
        serde_json::Value::Object(obj) => {
            let map: HashMap<String, Node> =
                obj.into_iter().map(|(k, v)| (k, json_to_node(v))).collect();
            Node::Object(map)
        }
    }
}

/// Converts YAML to the tree. Tags are dropped and non-string keys are
/// stringified so they can take part in key paths.
fn yaml_to_node(value: serde_yaml::Value) -> Node {
    match value {
        serde_yaml::Value::Null => Node::Null,
        serde_yaml::Value::Bool(b) => Node::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                Node::Number(f)
            } else if let Some(i) = n.as_i64() {
                Node::Number(i as f64)
            } else if let Some(u) = n.as_u64() {
                Node::Number(u as f64)
            } else {
                Node::Number(0.0)
            }
        }
        serde_yaml::Value::String(s) => Node::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Node::Array(seq.into_iter().map(yaml_to_node).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let hash_map: HashMap<String, Node> = map
                .into_iter()
                .map(|(k, v)| (yaml_key_to_string(k), yaml_to_node(v)))
                .collect();
            Node::Object(hash_map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_node(tagged.value),
    }
}

fn yaml_key_to_string(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => format!("{:?}", other),
    }
}

fn toml_to_node(value: toml::Value) -> Node {
    match value {
        toml::Value::String(s) => Node::String(s),
        toml::Value::Integer(i) => Node::Number(i as f64),
        toml::Value::Float(f) => Node::Number(f),
        toml::Value::Boolean(b) => Node::Bool(b),
        toml::Value::Datetime(dt) => Node::String(dt.to_string()),
        toml::Value::Array(arr) => Node::Array(arr.into_iter().map(toml_to_node).collect()),
        toml::Value::Table(table) => Node::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_node(v)))
                .collect(),
        ),
    }
}
