//! WASM bindings for jsonconf-core.
//!
//! Exposes the document operations as `#[wasm_bindgen]` functions callable
//! from JavaScript/TypeScript. Documents cross the boundary as JSON strings;
//! every function parses its inputs, runs the operation and renders the result.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p jsonconf-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/jsonconf_wasm.wasm
//! ```

use jsonconf_core::{Document, Path, Translation, Value};
use wasm_bindgen::prelude::*;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_doc(json: &str) -> Result<Document, JsValue> {
    jsonconf_core::parse(json).map_err(js_err)
}

fn render_doc(doc: &Document) -> Result<String, JsValue> {
    jsonconf_core::render(doc).map_err(js_err)
}

/// Deep-merge `source` into `target` and return the merged document.
#[wasm_bindgen]
pub fn update(target: &str, source: &str) -> Result<String, JsValue> {
    let mut target = parse_doc(target)?;
    let source = parse_doc(source)?;
    jsonconf_core::update(&mut target, &source);
    render_doc(&target)
}

/// Value at the `sep`-delimited `path`, as JSON, or `undefined` if absent.
///
/// Throws if the path descends through a non-object.
#[wasm_bindgen]
pub fn get(doc: &str, path: &str, sep: &str) -> Result<Option<String>, JsValue> {
    let doc = parse_doc(doc)?;
    let path = Path::parse(path, sep);
    match jsonconf_core::get(&doc, path.segments()).map_err(js_err)? {
        Some(value) => serde_json::to_string(value).map(Some).map_err(js_err),
        None => Ok(None),
    }
}

/// Assign the JSON `value` at the `sep`-delimited `path` and return the
/// updated document.
#[wasm_bindgen]
pub fn set(doc: &str, path: &str, sep: &str, value: &str) -> Result<String, JsValue> {
    let mut doc = parse_doc(doc)?;
    let value: Value = serde_json::from_str(value).map_err(js_err)?;
    jsonconf_core::set(&mut doc, Path::parse(path, sep).segments(), value).map_err(js_err)?;
    render_doc(&doc)
}

/// The unique top-level key matching `shortcut`, or `undefined`.
///
/// Every character of `ignore` is ignored while comparing.
#[wasm_bindgen(js_name = uniqueKeyMatch)]
pub fn unique_key_match(doc: &str, shortcut: &str, ignore: &str) -> Result<Option<String>, JsValue> {
    let doc = parse_doc(doc)?;
    let ignore: Vec<char> = ignore.chars().collect();
    Ok(jsonconf_core::unique_key_match_of(&doc, shortcut, &ignore).map(str::to_owned))
}

/// Apply a translation table (a JSON object of source path → destination
/// path) from `from` into `to`, returning the updated `to`.
#[wasm_bindgen]
pub fn translate(translation: &str, from: &str, to: &str, sep: &str) -> Result<String, JsValue> {
    let translation: Translation = serde_json::from_str(translation).map_err(js_err)?;
    let from = parse_doc(from)?;
    let mut to = parse_doc(to)?;
    translation.apply(&from, &mut to, sep).map_err(js_err)?;
    render_doc(&to)
}

/// Compare `subject` against `reference`, returning
/// `{"mismatches": [...], "notFound": [...]}`.
#[wasm_bindgen(js_name = compareTypes)]
pub fn compare_types(subject: &str, reference: &str) -> Result<String, JsValue> {
    let subject = parse_doc(subject)?;
    let reference = parse_doc(reference)?;
    let diff = jsonconf_core::compare_types(&subject, &reference);
    serde_json::to_string(&diff).map_err(js_err)
}
