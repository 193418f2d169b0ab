//! Numeric/string type-union normalization.
//!
//! Runtimes that allow large numbers to travel as strings describe every
//! numeric field as `["integer", "string"]` (or `["number", "string"]`), usually
//! with a digits-only `pattern`. On the wire the value is always numeric, so
//! the union is collapsed back to the numeric type and the string pattern is
//! dropped.
//!
//! Any `type` array left with a single member is collapsed to that member.
use std::fmt::Write as _;

use serde_json::{Map, Value};
use tracing::debug;

const STRING_TYPE: &str = "string";
const NUMERIC_TYPES: [&str; 2] = ["integer", "number"];

// ------------------------------- Walk ------------------------------------- //

/// Fix every numeric/string `type` union reachable from `node`, in place.
///
/// Returns how many unions were collapsed. Scalars are left alone.
pub fn normalize(node: &mut Value) -> usize {
    let mut path = String::new();
    walk(node, &mut path)
}

fn walk(node: &mut Value, path: &mut String) -> usize {
    match node {
        Value::Object(map) => {
            let mut fixed = usize::from(fix_type_union(map, path.as_str()));
            for (key, child) in map.iter_mut() {
                let mark = path.len();
                path.push('/');
                push_pointer_token(path, key);
                fixed += walk(child, path);
                path.truncate(mark);
            }
            fixed
        }
        Value::Array(items) => {
            let mut fixed = 0;
            for (index, item) in items.iter_mut().enumerate() {
                let mark = path.len();
                let _ = write!(path, "/{index}");
                fixed += walk(item, path);
                path.truncate(mark);
            }
            fixed
        }
        _ => 0,
    }
}

// ------------------------------ Per-object -------------------------------- //

/// Returns `true` when a numeric/string union on this object was collapsed.
fn fix_type_union(map: &mut Map<String, Value>, path: &str) -> bool {
    let Some(Value::Array(types)) = map.get_mut("type") else {
        return false;
    };

    let is_union = is_numeric_string_union(types);
    if is_union {
        types.retain(|t| t.as_str() != Some(STRING_TYPE));
    }

    let single = if types.len() == 1 { types.pop() } else { None };
    if let Some(single) = single {
        // existing key: position is kept
        map.insert("type".to_owned(), single);
    }

    if is_union {
        map.shift_remove("pattern");
        let at = if path.is_empty() { "/" } else { path };
        debug!(path = at, "collapsed numeric/string type union");
    }
    is_union
}

fn is_numeric_string_union(types: &[Value]) -> bool {
    has_type(types, STRING_TYPE) && NUMERIC_TYPES.iter().any(|numeric| has_type(types, numeric))
}

fn has_type(types: &[Value], name: &str) -> bool {
    types.iter().any(|t| t.as_str() == Some(name))
}

/// RFC 6901 escaping, so log paths can be fed straight to `Value::pointer`.
fn push_pointer_token(path: &mut String, key: &str) {
    for c in key.chars() {
        match c {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            _ => path.push(c),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
