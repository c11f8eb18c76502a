//! Nested key paths: lookup, membership and assignment by key sequence.
//!
//! A path is an ordered list of keys, each descending one level into nested
//! documents. Lookups treat a missing key as absence (`Ok(None)`), but a path
//! that tries to descend *through* a scalar or array is a caller error and
//! fails with [`ConfigError::TypeMismatch`].
//!
//! All functions take the path as `&[S]` for any `S: AsRef<str>`, so string
//! literal arrays, `Vec<String>` and [`Path::segments`] all work.

use crate::error::{ConfigError, Result};
use crate::value::{Document, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An owned key sequence.
///
/// # Examples
///
/// ```
/// use jsonconf_core::Path;
///
/// let path = Path::parse(" server / tls /cert ", "/");
/// assert_eq!(path.segments(), ["server", "tls", "cert"]);
/// assert_eq!(path.to_string(), "server.tls.cert");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Split `text` on `sep`, trimming surrounding whitespace from every
    /// segment. An empty separator yields a single-segment path.
    pub fn parse(text: &str, sep: &str) -> Self {
        if sep.is_empty() {
            return Self(vec![text.trim().to_owned()]);
        }
        text.split(sep).map(str::trim).collect()
    }

    /// Append a key and return self (builder pattern).
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(k.into());
        self
    }

    pub fn push(&mut self, k: impl Into<String>) {
        self.0.push(k.into());
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl AsRef<[String]> for Path {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Self(vec![key.to_owned()])
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<Vec<&str>> for Path {
    fn from(segments: Vec<&str>) -> Self {
        segments.into_iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        segments.into_iter().collect()
    }
}

fn type_mismatch<S: AsRef<str>>(path: &[S], depth: usize, found: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        path: path[..=depth].iter().map(|k| k.as_ref().to_owned()).collect(),
        found: found.kind(),
    }
}

/// Look up the value at `path`.
///
/// Returns `Ok(None)` if any key along the way is absent (or the path is
/// empty), and [`ConfigError::TypeMismatch`] if an intermediate value exists
/// but is not a document.
///
/// # Examples
///
/// ```
/// use jsonconf_core::{get, parse, Value};
///
/// let doc = parse(r#"{"db":{"port":5432},"name":"svc"}"#).unwrap();
/// assert_eq!(get(&doc, &["db", "port"]).unwrap(), Some(&Value::Number(5432.0)));
/// assert_eq!(get(&doc, &["db", "user"]).unwrap(), None);
/// assert!(get(&doc, &["name", "first"]).is_err());
/// ```
pub fn get<'a, S: AsRef<str>>(doc: &'a Document, path: &[S]) -> Result<Option<&'a Value>> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(None);
    };
    let mut current = doc;
    for (depth, key) in parents.iter().enumerate() {
        match current.get(key.as_ref()) {
            None => return Ok(None),
            Some(Value::Document(child)) => current = child,
            Some(other) => return Err(type_mismatch(path, depth, other)),
        }
    }
    Ok(current.get(last.as_ref()))
}

/// Mutable counterpart of [`get`], with the same absence and mismatch rules.
pub fn get_mut<'a, S: AsRef<str>>(
    doc: &'a mut Document,
    path: &[S],
) -> Result<Option<&'a mut Value>> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(None);
    };
    let mut current = doc;
    for (depth, key) in parents.iter().enumerate() {
        match current.get_mut(key.as_ref()) {
            None => return Ok(None),
            Some(Value::Document(child)) => current = child,
            Some(other) => return Err(type_mismatch(path, depth, other)),
        }
    }
    Ok(current.get_mut(last.as_ref()))
}

/// True iff `key` is a direct member of `doc`.
pub fn has_key(doc: &Document, key: &str) -> bool {
    doc.contains_key(key)
}

/// True iff [`get`] would find a value at `path`.
pub fn has_key_nested<S: AsRef<str>>(doc: &Document, path: &[S]) -> Result<bool> {
    get(doc, path).map(|found| found.is_some())
}

/// Assign `value` at `path`, creating empty documents for missing
/// intermediate keys.
///
/// The final key is overwritten whatever its previous type. An existing
/// intermediate value that is not a document fails with
/// [`ConfigError::TypeMismatch`] and leaves `doc` unchanged. An empty path is
/// a no-op.
///
/// # Examples
///
/// ```
/// use jsonconf_core::{render, set, Document};
///
/// let mut doc = Document::new();
/// set(&mut doc, &["log", "level"], "debug").unwrap();
/// assert_eq!(render(&doc).unwrap(), r#"{"log":{"level":"debug"}}"#);
/// ```
pub fn set<S: AsRef<str>>(doc: &mut Document, path: &[S], value: impl Into<Value>) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    // Documents are only created below the last existing key, so a mismatch
    // is always found before anything has been inserted.
    let mut current = doc;
    for (depth, key) in parents.iter().enumerate() {
        let slot = current
            .entry(key.as_ref())
            .or_insert_with(|| Value::Document(Document::new()));
        match slot {
            Value::Document(child) => current = child,
            other => return Err(type_mismatch(path, depth, other)),
        }
    }
    current.insert(last.as_ref(), value);
    Ok(())
}

impl Document {
    /// Method form of [`get`].
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Result<Option<&Value>> {
        get(self, path)
    }

    /// Method form of [`has_key_nested`].
    pub fn contains_path<S: AsRef<str>>(&self, path: &[S]) -> Result<bool> {
        has_key_nested(self, path)
    }

    /// Method form of [`set`].
    pub fn set_path<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<Value>) -> Result<()> {
        set(self, path, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_segments() {
        let path = Path::parse("a / b/ c ", "/");
        assert_eq!(path.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn parse_with_empty_separator_keeps_whole_text() {
        assert_eq!(Path::parse(" a/b ", "").segments(), ["a/b"]);
    }

    #[test]
    fn parse_multichar_separator() {
        assert_eq!(Path::parse("a::b", "::").segments(), ["a", "b"]);
    }

    #[test]
    fn builder_and_display() {
        let path = Path::new().key("x").key("y");
        assert_eq!(path.len(), 2);
        assert_eq!(path.last(), Some("y"));
        assert_eq!(path.to_string(), "x.y");
    }

    #[test]
    fn mismatch_path_stops_at_offending_key() {
        let mut doc = Document::new();
        doc.insert("a", 1);
        let err = get(&doc, &["a", "b", "c"]).unwrap_err();
        match err {
            ConfigError::TypeMismatch { path, found } => {
                assert_eq!(path, Path::from(["a"]));
                assert_eq!(found.as_str(), "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn set_does_not_create_parents_before_mismatch() {
        let mut doc = Document::new();
        doc.insert("a", "scalar");
        let before = doc.clone();
        assert!(set(&mut doc, &["a", "b"], 1).is_err());
        assert_eq!(doc, before);
    }
}
