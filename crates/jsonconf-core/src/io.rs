//! JSON text and file collaborator.
//!
//! Everything else in the crate works on in-memory documents; this module is
//! the only place text is parsed or produced and the only place that touches
//! the filesystem.
//!
//! # Key design decisions
//!
//! - **Top level is always an object**: a JSON array or scalar at the root is
//!   rejected with [`ConfigError::NotADocument`] rather than wrapped.
//! - **Numbers**: every JSON number becomes an `f64`. Integral values render
//!   back without a fractional part, so `{"port":8080}` survives a round trip
//!   textually as well as structurally.
//! - **Writes overwrite in place**: no temp file, no rename, no backup.

use crate::error::{ConfigError, Result};
use crate::value::{Document, Value};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Parse a JSON object into a document.
///
/// Fails with [`ConfigError::Parse`] on malformed JSON and
/// [`ConfigError::NotADocument`] if the top-level value is not an object.
pub fn parse(text: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(text)?;
    Document::try_from(value)
}

/// Parse a JSON object whose enclosing braces may be omitted.
///
/// Blank input gives an empty document. Input that does not start with `{`
/// is treated as a bare object body and wrapped in braces; input that starts
/// with `{` but lacks the closing `}` has it appended.
///
/// # Examples
///
/// ```
/// use jsonconf_core::{parse_lenient, render};
///
/// let doc = parse_lenient(r#" "retries": 3, "backoff": {"ms": 50} "#).unwrap();
/// assert_eq!(render(&doc).unwrap(), r#"{"backoff":{"ms":50},"retries":3}"#);
/// assert!(parse_lenient("  ").unwrap().is_empty());
/// ```
pub fn parse_lenient(text: &str) -> Result<Document> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Document::new());
    }

    // A bare body always begins with a key, never with `{`.
    let wrapped = if !trimmed.starts_with('{') {
        format!("{{{trimmed}}}")
    } else if !trimmed.ends_with('}') {
        format!("{trimmed}}}")
    } else {
        return parse(trimmed);
    };
    parse(&wrapped)
}

/// Render a document as compact JSON.
///
/// Fails with [`ConfigError::Encode`] if the document holds a NaN or
/// infinite number, which JSON cannot represent.
pub fn render(doc: &Document) -> Result<String> {
    serde_json::to_string(doc).map_err(|e| ConfigError::Encode(e.to_string()))
}

/// Render a document as indented JSON.
pub fn render_pretty(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(|e| ConfigError::Encode(e.to_string()))
}

/// Read a document from a JSON file.
///
/// The file must hold a complete JSON object; see [`parse`]. On failure the
/// caller's existing documents are untouched, since a fresh one is returned.
pub fn read(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let doc = parse(&text)?;
    debug!(path = %path.display(), keys = doc.len(), "read config document");
    Ok(doc)
}

/// Write a document to a file as indented JSON, replacing any existing
/// content.
pub fn write(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = render_pretty(doc)?;
    fs::write(path, text).map_err(|e| ConfigError::io(path, e))?;
    debug!(path = %path.display(), keys = doc.len(), "wrote config document");
    Ok(())
}

/// Lenient parse; see [`parse_lenient`].
impl FromStr for Document {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        parse_lenient(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_appends_missing_close_brace() {
        let doc = parse_lenient(r#"{"a":1"#).unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn lenient_body_ending_in_nested_object() {
        let doc = parse_lenient(r#""a":{"b":1}"#).unwrap();
        assert!(doc.get("a").unwrap().is_document());
    }

    #[test]
    fn from_str_is_lenient() {
        let doc: Document = r#""x": true"#.parse().unwrap();
        assert_eq!(doc.get("x").and_then(|v| v.as_bool()), Some(true));
    }
}
