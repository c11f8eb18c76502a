//! Error types for document parsing, rendering, file access and path traversal.

use crate::path::Path;
use crate::value::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, writing or addressing a document.
///
/// Absence is not an error: `get` and `has_key_nested` report a missing key
/// through their return value. Only a structurally impossible path (descending
/// through a non-document) or a failed translation lookup is.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input was valid JSON but its top level was not an object.
    #[error("expected a JSON object at the top level, found {0}")]
    NotADocument(ValueKind),

    /// The document could not be rendered (e.g., it holds a NaN).
    #[error("Encoding error: {0}")]
    Encode(String),

    /// A document file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation's source path does not exist in the source document.
    #[error("key {path} not found in source document")]
    KeyNotFound { path: Path },

    /// A path descended into a value that is not a document.
    /// `path` ends at the offending key.
    #[error("type mismatch at {path}: expected document, found {found}")]
    TypeMismatch { path: Path, found: ValueKind },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout jsonconf-core.
pub type Result<T> = std::result::Result<T, ConfigError>;
