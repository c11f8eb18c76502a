//! Structural type comparison of a document against a reference.
//!
//! The diff is one-directional: it walks the *subject* and reports where its
//! shape departs from the reference. Keys only the reference has are never
//! reported.
//!
//! Paths in the output join nested keys with `:` (`server:tls:cert`), and a
//! mismatch entry appends the two kinds: `server:port:string!=number`.

use crate::value::{Document, Value};
use serde::Serialize;

/// Accumulated result of a type comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDiff {
    /// Keys present in both documents whose value kinds differ, formatted as
    /// `<path>:<subject kind>!=<reference kind>`.
    pub mismatches: Vec<String>,
    /// Keys present in the subject but absent from the reference.
    pub not_found: Vec<String>,
}

impl TypeDiff {
    /// True when the subject fits the reference's shape.
    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty() && self.not_found.is_empty()
    }
}

/// Compare the value kinds of `subject` against `reference`.
///
/// # Examples
///
/// ```
/// use jsonconf_core::{compare_types, parse};
///
/// let subject = parse(r#"{"d":true,"extra":1}"#).unwrap();
/// let reference = parse(r#"{"d":0}"#).unwrap();
/// let diff = compare_types(&subject, &reference);
/// assert_eq!(diff.mismatches, ["d:bool!=number"]);
/// assert_eq!(diff.not_found, ["extra"]);
/// ```
pub fn compare_types(subject: &Document, reference: &Document) -> TypeDiff {
    let mut diff = TypeDiff::default();
    compare_types_into(subject, reference, "", &mut diff);
    diff
}

/// Accumulating form of [`compare_types`]: entries are appended to `diff`
/// with `prefix` (if non-empty) prepended to every path.
///
/// Branches stop at the first missing key or kind mismatch; only documents
/// of matching kind are descended into.
pub fn compare_types_into(subject: &Document, reference: &Document, prefix: &str, diff: &mut TypeDiff) {
    for (key, value) in subject {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}:{key}")
        };

        let Some(expected) = reference.get(key) else {
            diff.not_found.push(dotted);
            continue;
        };

        match (value, expected) {
            (Value::Document(nested), Value::Document(nested_ref)) => {
                compare_types_into(nested, nested_ref, &dotted, diff);
            }
            _ if value.kind() == expected.kind() => {}
            _ => diff
                .mismatches
                .push(format!("{dotted}:{}!={}", value.kind(), expected.kind())),
        }
    }
}

impl Document {
    /// Method form of [`compare_types`], with `self` as the subject.
    pub fn compare_types(&self, reference: &Document) -> TypeDiff {
        compare_types(self, reference)
    }
}
