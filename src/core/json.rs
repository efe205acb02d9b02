//! Typed lookups over a dynamic `serde_json::Value` tree.
//!
//! Every helper answers "not found" with `None`; a missing key, a non-object intermediate
//! or a leaf of the wrong type are all treated the same.

use serde_json::{Map, Value};

/// Walks `path` one object key at a time.
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |node, key| node.as_object()?.get(*key))
}

/// The string at `path`, if present and a JSON string.
pub fn string_at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(root, path).and_then(Value::as_str)
}

/// The mapping at `path`, if present and a JSON object.
pub fn object_at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Map<String, Value>> {
    lookup(root, path).and_then(Value::as_object)
}
