//! Shortcut lookup of top-level keys by unique, case-insensitive prefix.
//!
//! Both the shortcut and each key are normalized before comparison: characters
//! from the ignore set are deleted and the rest lower-cased. So with `_`
//! ignored, `frob` matches `FROB`, `fRoB`, `frobish` and `_f_ro_b_`.

use crate::value::Document;
use std::collections::HashSet;

/// Reusable matcher configuration.
///
/// # Examples
///
/// ```
/// use jsonconf_core::{parse, KeyMatcher};
///
/// let doc = parse(r#"{"max_retries":3,"timeout-ms":100}"#).unwrap();
/// let matcher = KeyMatcher::new().ignore(['_', '-']);
/// assert_eq!(matcher.find(&doc, "MaxRe"), Some("max_retries"));
/// assert_eq!(matcher.find(&doc, "timeoutms"), Some("timeout-ms"));
/// assert_eq!(matcher.find(&doc, "x"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyMatcher {
    ignore: HashSet<char>,
}

impl KeyMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add characters to delete before comparing.
    pub fn ignore(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.ignore.extend(chars);
        self
    }

    /// Normalized form of `text`: ignored characters removed, the rest
    /// lower-cased.
    pub fn filter(&self, text: &str) -> String {
        text.chars()
            .filter(|c| !self.ignore.contains(c))
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// The single top-level key of `doc` whose normalized form starts with the
    /// normalized `shortcut`, returned verbatim.
    ///
    /// `None` when no key matches or when more than one does; ambiguity is a
    /// miss, not an error. Nested documents are not searched.
    pub fn find<'a>(&self, doc: &'a Document, shortcut: &str) -> Option<&'a str> {
        let wanted = self.filter(shortcut);
        let mut found = None;
        for key in doc.keys() {
            if self.filter(key).starts_with(&wanted) {
                if found.is_some() {
                    return None;
                }
                found = Some(key.as_str());
            }
        }
        found
    }
}

/// One-shot form of [`KeyMatcher::find`].
///
/// ```
/// use jsonconf_core::{parse, unique_key_match_of};
///
/// let doc = parse(r#"{"key1":1,"key2":2,"other":3}"#).unwrap();
/// assert_eq!(unique_key_match_of(&doc, "k", &[]), None);
/// assert_eq!(unique_key_match_of(&doc, "KEY2", &[]), Some("key2"));
/// ```
pub fn unique_key_match_of<'a>(doc: &'a Document, shortcut: &str, ignore: &[char]) -> Option<&'a str> {
    KeyMatcher::new()
        .ignore(ignore.iter().copied())
        .find(doc, shortcut)
}

impl Document {
    /// Method form of [`unique_key_match_of`].
    pub fn unique_key_match_of(&self, shortcut: &str, ignore: &[char]) -> Option<&str> {
        unique_key_match_of(self, shortcut, ignore)
    }
}
