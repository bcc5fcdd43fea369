//! Key-rename detection at a single object level.
//!
//! A key present only on the old side is paired with a key present only on
//! the new side when their values are structurally equal. Pairing never
//! crosses parent paths.

use jsoncmp_types::join_path;
use serde_json::{Map, Value};

use crate::canonical::values_equal;

/// A proposed `old key -> new key` pairing.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyRename {
    pub old_key: String,
    pub new_key: String,
    pub old_path: String,
    pub new_path: String,
    pub old_value: Value,
    pub new_value: Value,
}

/// Propose renames between two sibling object levels under `parent`.
///
/// Old-only keys are visited in insertion order; for each, new-only keys are
/// scanned in insertion order and the first one holding an equal value wins.
/// New keys are not consumed by a match, so two old keys with equal values may
/// both pair with the same new key.
pub fn detect_renames(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    parent: &str,
) -> Vec<KeyRename> {
    let added: Vec<(&String, &Value)> = new
        .iter()
        .filter(|(key, _)| !old.contains_key(*key))
        .collect();
    if added.is_empty() {
        return Vec::new();
    }

    let mut renames = Vec::new();
    for (old_key, old_value) in old {
        if new.contains_key(old_key) {
            continue;
        }
        let candidate = added
            .iter()
            .find(|(_, new_value)| values_equal(old_value, new_value));
        if let Some((new_key, new_value)) = candidate {
            renames.push(KeyRename {
                old_key: old_key.clone(),
                new_key: (*new_key).clone(),
                old_path: join_path(parent, old_key),
                new_path: join_path(parent, new_key),
                old_value: old_value.clone(),
                new_value: (*new_value).clone(),
            });
        }
    }
    renames
}
