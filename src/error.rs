//! Custom error types for keydiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No such file or directory: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not detect file format for {path}")]
    UnknownFormat { path: String },

    #[error("Expected a key-value document in {path}, found {found}")]
    NotAnObject { path: String, found: String },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum KeydiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },
}

/// Coarse classification used to pick the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input path does not resolve to a file
    NotFound,
    /// A file was read but its content is not valid structured data
    Parse,
    /// Anything else (permissions, encoding, wrong document shape, ...)
    Unexpected,
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn yaml_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.into(),
            source,
        }
    }

    pub fn toml_error(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::TomlError {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::UnknownFormat { path: path.into() }
    }

    pub fn not_an_object(path: impl Into<String>, found: impl Into<String>) -> Self {
        Self::NotAnObject {
            path: path.into(),
            found: found.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::FileNotFound { .. } => ErrorKind::NotFound,
            ParseError::JsonError { .. }
            | ParseError::YamlError { .. }
            | ParseError::TomlError { .. }
            | ParseError::UnknownFormat { .. } => ErrorKind::Parse,
            ParseError::ReadError { .. } | ParseError::NotAnObject { .. } => {
                ErrorKind::Unexpected
            }
        }
    }

    /// Renders the one-line message printed by the CLI for this error.
    pub fn user_message(&self) -> String {
        match self {
            ParseError::FileNotFound { .. } => {
                format!("Error: {}. Please check the file paths.", self)
            }
            ParseError::JsonError { source, .. } => format!("Error decoding JSON: {}", source),
            ParseError::YamlError { source, .. } => format!("Error decoding YAML: {}", source),
            ParseError::TomlError { source, .. } => {
                format!("Error decoding TOML: {}", source.message())
            }
            ParseError::UnknownFormat { .. } => format!("Error decoding file: {}", self),
            ParseError::ReadError { .. } | ParseError::NotAnObject { .. } => {
                unexpected_message(self)
            }
        }
    }
}

impl KeydiffError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KeydiffError::Parse(err) => err.kind(),
            KeydiffError::Output(_) | KeydiffError::ConfigError { .. } => ErrorKind::Unexpected,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            KeydiffError::Parse(err) => err.user_message(),
            other => unexpected_message(other),
        }
    }
}

/// Message for failures outside the not-found and parse categories.
pub fn unexpected_message(err: &dyn std::fmt::Display) -> String {
    format!("An unexpected error occurred: {}", err)
}
