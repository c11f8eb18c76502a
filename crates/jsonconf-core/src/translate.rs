//! Copy values between documents through a table of path mappings.
//!
//! A [`Translation`] maps a delimited source path (e.g. `"b/c"`) to a
//! delimited destination path. Applying it reads every source path from one
//! document and writes the value at the destination path of another.

use crate::error::{ConfigError, Result};
use crate::path::{self, Path};
use crate::value::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Mapping of source path strings to destination path strings.
///
/// Serializes as a plain JSON object, so translation tables can live in
/// configuration files themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translation(BTreeMap<String, String>);

impl Translation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `from` to `to`, returning the destination previously mapped from
    /// `from`.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) -> Option<String> {
        self.0.insert(from.into(), to.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The reverse mapping. When several sources share a destination, only
    /// one of them survives.
    pub fn inverted(&self) -> Translation {
        self.0.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
    }

    /// Copy every mapped value from `from` into `to`.
    ///
    /// Paths are split on `sep` and each segment is trimmed. A source path
    /// missing from `from` fails with [`ConfigError::KeyNotFound`] and stops
    /// the whole call; pairs applied before the failure stay applied. Type
    /// mismatches from the underlying [`path::get`]/[`path::set`] propagate the
    /// same way.
    ///
    /// The order in which pairs are applied is not part of the contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonconf_core::{parse, render, Translation};
    ///
    /// let translation: Translation = [("a", "alpha"), ("b/c", "beta/gamma")].into_iter().collect();
    /// let from = parse(r#"{"a":1,"b":{"c":3,"d":4}}"#).unwrap();
    /// let mut to = parse(r#"{"alpha":0,"beta":{"gamma":7,"delta":4}}"#).unwrap();
    ///
    /// translation.apply(&from, &mut to, "/").unwrap();
    /// assert_eq!(render(&to).unwrap(), r#"{"alpha":1,"beta":{"delta":4,"gamma":3}}"#);
    /// ```
    pub fn apply(&self, from: &Document, to: &mut Document, sep: &str) -> Result<()> {
        for (source, destination) in &self.0 {
            let source_path = Path::parse(source, sep);
            let destination_path = Path::parse(destination, sep);

            let Some(value) = path::get(from, source_path.segments())? else {
                warn!(path = %source_path, "translation source key not found");
                return Err(ConfigError::KeyNotFound { path: source_path });
            };

            debug!(from = %source_path, to = %destination_path, "applying translation");
            path::set(to, destination_path.segments(), value.clone())?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translation {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for Translation {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_swaps_paths() {
        let t: Translation = [("a/b", "x")].into_iter().collect();
        let inv = t.inverted();
        assert_eq!(inv.iter().collect::<Vec<_>>(), vec![("x", "a/b")]);
    }

    #[test]
    fn deserializes_from_json_object() {
        let t: Translation = serde_json::from_str(r#"{"a":"b","c/d":"e"}"#).unwrap();
        assert_eq!(t.len(), 2);
    }
}
