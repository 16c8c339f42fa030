//! Canonical serialization of runlog content.
//!
//! The digest in [`crate::hash`] must never depend on mapping insertion
//! order, so hashing goes through this canonical form instead of raw JSON:
//! object keys are sorted lexicographically at every level, sequences keep
//! their order, and primitives use their standard literal encoding.

use serde_json::Value;

/// Render a JSON value in canonical form.
pub fn canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        // serde_json's string encoder handles escaping; infallible for a
        // plain string.
        Value::String(s) => {
            out.push_str(&serde_json::to_string(s).unwrap_or_default());
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key).unwrap_or_default());
                out.push(':');
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
