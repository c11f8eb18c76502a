//! Recursive, destructive merge of one document into another.
//!
//! Merging is permissive: unlike [`crate::path::set`], a document arriving
//! over a scalar simply replaces it. Nothing in this module can fail.

use crate::value::{Document, Value};
use tracing::trace;

/// Merge `source` into `target`.
///
/// For every key of `source`:
///
/// 1. **Both documents**: merge recursively.
/// 2. **Anything else**: the target slot is replaced by a copy of the source
///    value, whatever it held before (or inserted if it was absent).
///
/// Keys present only in `target` are left alone, and `source` is never
/// modified. Applying the same `source` twice gives the same result as
/// applying it once.
///
/// # Examples
///
/// ```
/// use jsonconf_core::{parse, render, update};
///
/// let mut target = parse(r#"{"k":{"a":1,"b":2}}"#).unwrap();
/// let source = parse(r#"{"k":{"a":9,"c":3}}"#).unwrap();
/// update(&mut target, &source);
/// assert_eq!(render(&target).unwrap(), r#"{"k":{"a":9,"b":2,"c":3}}"#);
/// ```
pub fn update(target: &mut Document, source: &Document) {
    for (key, incoming) in source {
        match (target.get_mut(key), incoming) {
            (Some(Value::Document(existing)), Value::Document(nested)) => {
                trace!(key = %key, "merging nested document");
                update(existing, nested);
            }
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Non-destructive form of [`update`]: returns `overlay` merged over a copy
/// of `base`.
pub fn merged(base: &Document, overlay: &Document) -> Document {
    let mut out = base.clone();
    update(&mut out, overlay);
    out
}

impl Document {
    /// Method form of [`update`].
    pub fn update(&mut self, source: &Document) {
        update(self, source);
    }
}
