//! Path flattening: reduce one tree to `dotted path -> leaf value`.
//!
//! Mirrors the differ's recursion rule: only objects are descended into;
//! arrays, strings, numbers, booleans and null are leaves. Empty objects
//! contribute nothing. A non-object root becomes a single leaf at the empty
//! path.

use std::collections::BTreeMap;

use jsoncmp_types::{join_path, ROOT_PATH};
use serde_json::{Map, Value};

/// Leaves of one tree keyed by dotted path, in lexicographic path order.
pub type FlatTree<'a> = BTreeMap<String, &'a Value>;

/// Flatten `tree` into its leaves.
pub fn flatten(tree: &Value) -> FlatTree<'_> {
    let mut out = BTreeMap::new();
    match tree {
        Value::Object(map) => flatten_into(map, ROOT_PATH, &mut out),
        leaf => {
            out.insert(ROOT_PATH.to_string(), leaf);
        }
    }
    out
}

fn flatten_into<'a>(map: &'a Map<String, Value>, prefix: &str, out: &mut FlatTree<'a>) {
    for (key, value) in map {
        let path = join_path(prefix, key);
        match value {
            Value::Object(child) => flatten_into(child, &path, out),
            leaf => {
                out.insert(path, leaf);
            }
        }
    }
}
