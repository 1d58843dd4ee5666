//! In-memory tree representation for localization documents.

use std::collections::HashMap;

/// A node representing a value in a structured data file (JSON, YAML, TOML).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(HashMap<String, Node>),
    Array(Vec<Node>),
}

impl Node {
    pub fn type_name(&self) -> &str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Object(_) => "object",
            Node::Array(_) => "array",
        }
    }

    /// Returns the nested map if this node is an object.
    ///
    /// Arrays are not branches: their elements are never addressed by key path.
    pub fn as_object(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

}

/// The root of a loaded localization file.
///
/// A document is always a key-value map at the top level. Files whose root is
/// an array or a scalar are rejected by the loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: HashMap<String, Node>,
}

impl Document {
    pub fn new(root: HashMap<String, Node>) -> Self {
        Self { root }
    }

    /// Builds a document from a parsed node, handing the node back if it is not an object.
    pub fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Object(root) => Ok(Self { root }),
            other => Err(other),
        }
    }

    pub fn root(&self) -> &HashMap<String, Node> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }
}
