//! JSON key normalization for upstream view models.
//!
//! The upstream API serializes entities with PascalCase property names
//! (`Make`, `LicensePlate`) while the web client reads camelCase (`make`,
//! `licensePlate`). Read responses for vehicles pass through
//! [`normalize_keys`] so the client sees one consistent casing regardless
//! of which upstream serializer produced the body.

use serde_json::{Map, Value};

/// Recursively lowercase the first character of every object key.
///
/// Arrays are walked element-by-element; non-object leaves are returned
/// untouched. When lowercasing makes two keys collide (`Make` and `make`
/// in the same object), the first-written value wins and the duplicate is
/// dropped.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                let normalized = lower_first(&key);
                out.entry(normalized).or_insert_with(|| normalize_keys(val));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Lowercase the first character of a key if it is an ASCII uppercase letter.
fn lower_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut out = String::with_capacity(key.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        _ => key.to_owned(),
    }
}
