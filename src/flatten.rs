//! Nested record flattening
//!
//! Converts the arbitrarily nested JSON objects returned by `gh repo view`
//! into single-level maps keyed by dot-joined paths, so each repository
//! becomes one tabular row.

use serde_json::{Map, Value};

/// Separator between nested key segments
const SEPARATOR: &str = ".";

/// Flatten a nested object into a single-level map.
///
/// Nested objects recurse with their key as a prefix; arrays are stored as
/// their compact JSON encoding under the combined key; scalars are kept
/// as-is. Key collisions between merged sub-objects resolve last-write-wins.
/// Input key order is preserved.
pub fn flatten(object: &Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(object, None, &mut flat);
    flat
}

fn flatten_into(object: &Map<String, Value>, prefix: Option<&str>, out: &mut Map<String, Value>) {
    for (key, value) in object {
        let flat_key = match prefix {
            Some(prefix) => format!("{prefix}{SEPARATOR}{key}"),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) => flatten_into(nested, Some(&flat_key), out),
            Value::Array(_) => {
                out.insert(flat_key, Value::String(value.to_string()));
            }
            scalar => {
                out.insert(flat_key, scalar.clone());
            }
        }
    }
}

/// Render one flattened value as a tabular cell.
///
/// Missing and null values become the empty string; strings are used
/// verbatim; other scalars use their JSON form.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
