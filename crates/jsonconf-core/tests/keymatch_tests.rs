//! Unique prefix matching over top-level keys.

use jsonconf_core::{unique_key_match_of, Document, KeyMatcher};
use serde_json::json;

fn doc(json: serde_json::Value) -> Document {
    Document::try_from(json).unwrap()
}

#[test]
fn ambiguous_prefix_is_none() {
    let d = doc(json!({"key1": 1, "key2": 2}));
    assert_eq!(unique_key_match_of(&d, "k", &[]), None);
}

#[test]
fn unique_prefix_returns_key() {
    let d = doc(json!({"key1": 1, "other": 2}));
    assert_eq!(unique_key_match_of(&d, "k", &[]), Some("key1"));
}

#[test]
fn ignored_characters_are_removed_from_keys() {
    let d = doc(json!({"_x_key_": 1}));
    assert_eq!(unique_key_match_of(&d, "xkey", &['_']), Some("_x_key_"));
}

#[test]
fn ignored_characters_are_removed_from_shortcut() {
    let d = doc(json!({"frobnicate": 1, "other": 2}));
    assert_eq!(unique_key_match_of(&d, "f-r-o-b", &['-']), Some("frobnicate"));
}

#[test]
fn matching_is_case_insensitive() {
    let d = doc(json!({"MaxConnections": 1, "timeout": 2}));
    assert_eq!(unique_key_match_of(&d, "maxc", &[]), Some("MaxConnections"));
    assert_eq!(unique_key_match_of(&d, "TIME", &[]), Some("timeout"));
}

#[test]
fn no_match_is_none() {
    let d = doc(json!({"alpha": 1, "beta": 2}));
    assert_eq!(unique_key_match_of(&d, "gamma", &[]), None);
}

#[test]
fn empty_document_is_none() {
    assert_eq!(unique_key_match_of(&Document::new(), "a", &[]), None);
}

#[test]
fn exact_key_still_ambiguous_with_longer_sibling() {
    let d = doc(json!({"port": 1, "port_range": 2}));
    assert_eq!(unique_key_match_of(&d, "port", &[]), None);
}

#[test]
fn empty_shortcut_matches_single_key_only() {
    assert_eq!(
        unique_key_match_of(&doc(json!({"only": 1})), "", &[]),
        Some("only")
    );
    assert_eq!(unique_key_match_of(&doc(json!({"a": 1, "b": 2})), "", &[]), None);
}

#[test]
fn nested_keys_are_not_searched() {
    let d = doc(json!({"outer": {"inner": 1}}));
    assert_eq!(unique_key_match_of(&d, "inner", &[]), None);
}

#[test]
fn matcher_is_reusable() {
    let d = doc(json!({"log_level": "info", "log-file": "/tmp/x", "port": 1}));
    let matcher = KeyMatcher::new().ignore(['_', '-']);
    assert_eq!(matcher.find(&d, "loglevel"), Some("log_level"));
    assert_eq!(matcher.find(&d, "logf"), Some("log-file"));
    assert_eq!(matcher.find(&d, "log"), None);
    assert_eq!(d.unique_key_match_of("po", &[]), Some("port"));
}
