//! JSON text and file collaborator.

use jsonconf_core::{parse, parse_lenient, read, render, render_pretty, write, ConfigError, Document, Value, ValueKind};
use serde_json::json;

fn doc(json: serde_json::Value) -> Document {
    Document::try_from(json).unwrap()
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn parse_maps_every_json_type() {
    let d = parse(r#"{"n":null,"b":true,"x":1.5,"i":3,"s":"str","a":[1,"two"],"o":{"k":"v"}}"#).unwrap();
    assert_eq!(d.get("n"), Some(&Value::Null));
    assert_eq!(d.get("b"), Some(&Value::Bool(true)));
    assert_eq!(d.get("x"), Some(&Value::Number(1.5)));
    assert_eq!(d.get("i"), Some(&Value::Number(3.0)));
    assert_eq!(d.get("s"), Some(&Value::from("str")));
    assert_eq!(
        d.get("a"),
        Some(&Value::Array(vec![Value::Number(1.0), Value::from("two")]))
    );
    assert_eq!(d.get("o").unwrap().kind(), ValueKind::Document);
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(matches!(parse(r#"{"a":"#), Err(ConfigError::Parse(_))));
}

#[test]
fn parse_rejects_top_level_array() {
    assert!(matches!(
        parse("[1,2]"),
        Err(ConfigError::NotADocument(ValueKind::Array))
    ));
}

#[test]
fn parse_rejects_top_level_scalar() {
    assert!(matches!(
        parse("42"),
        Err(ConfigError::NotADocument(ValueKind::Number))
    ));
}

#[test]
fn parse_strict_rejects_bare_body() {
    assert!(parse(r#""a":1"#).is_err());
}

#[test]
fn duplicate_keys_keep_last() {
    let d = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(d.get("a"), Some(&Value::Number(2.0)));
}

#[test]
fn lenient_accepts_bare_body() {
    let d = parse_lenient(r#""a": 1, "b": {"c": [true]}"#).unwrap();
    assert_eq!(d, doc(json!({"a": 1, "b": {"c": [true]}})));
}

#[test]
fn lenient_accepts_full_object() {
    let d = parse_lenient(" {\"a\": 1}\n").unwrap();
    assert_eq!(d, doc(json!({"a": 1})));
}

#[test]
fn lenient_empty_and_blank_are_empty_documents() {
    assert!(parse_lenient("").unwrap().is_empty());
    assert!(parse_lenient(" \n\t ").unwrap().is_empty());
}

#[test]
fn lenient_still_rejects_garbage() {
    assert!(matches!(
        parse_lenient("not json at all"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn render_is_compact_with_sorted_keys() {
    let d = doc(json!({"b": 1, "a": [1.5, null], "c": {"z": "s", "y": false}}));
    assert_eq!(
        render(&d).unwrap(),
        r#"{"a":[1.5,null],"b":1,"c":{"y":false,"z":"s"}}"#
    );
}

#[test]
fn render_pretty_is_indented() {
    let d = doc(json!({"a": {"b": 1}}));
    assert_eq!(
        render_pretty(&d).unwrap(),
        "{\n  \"a\": {\n    \"b\": 1\n  }\n}"
    );
}

#[test]
fn render_empty_document() {
    assert_eq!(render(&Document::new()).unwrap(), "{}");
}

#[test]
fn render_rejects_non_finite_numbers() {
    let mut d = Document::new();
    d.insert("inf", f64::INFINITY);
    assert!(matches!(render(&d), Err(ConfigError::Encode(_))));
}

#[test]
fn text_round_trip_preserves_document() {
    let d = doc(json!({"s": "q\"uote", "n": -0.25, "big": 9007199254740992_i64, "l": [[], {}], "o": {"e": {}}}));
    assert_eq!(parse(&render(&d).unwrap()).unwrap(), d);
}

#[test]
fn display_renders_compact_json() {
    let d = doc(json!({"a": 1}));
    assert_eq!(d.to_string(), r#"{"a":1}"#);
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn write_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let d = doc(json!({"server": {"host": "h", "port": 1}, "tags": ["x"]}));

    write(&d, &path).unwrap();
    let back = read(&path).unwrap();

    assert_eq!(back, d);
}

#[test]
fn write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    write(&doc(json!({"old": 1, "stale": true})), &path).unwrap();
    write(&doc(json!({"new": 2})), &path).unwrap();

    assert_eq!(read(&path).unwrap(), doc(json!({"new": 2})));
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = read(&path).unwrap_err();

    match err {
        ConfigError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ nope").unwrap();

    assert!(matches!(read(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn failed_read_leaves_existing_document_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "[]").unwrap();
    let mut current = doc(json!({"keep": 1}));

    if let Ok(fresh) = read(&path) {
        current = fresh;
    }

    assert_eq!(current, doc(json!({"keep": 1})));
}

#[test]
fn write_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/config.json");

    assert!(matches!(
        write(&Document::new(), &path),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn file_operations_emit_tracing_events() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("jsonconf_core=debug"))
        .with_test_writer()
        .try_init();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("traced.json");
    write(&doc(json!({"a": 1})), &path).unwrap();
    assert_eq!(read(&path).unwrap().len(), 1);
}
