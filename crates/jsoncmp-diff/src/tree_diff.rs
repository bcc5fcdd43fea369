//! Tree-level diff: walk two JSON documents and categorize every key.
//!
//! At each object level renames are detected first, then the union of keys is
//! classified with the precedence KeyChanged > EmptyValue > (recurse when both
//! sides are objects) > Modified > Unchanged. Arrays are leaves.

use jsoncmp_types::{classify, is_empty_string, join_path, ROOT_PATH};
use serde_json::{Map, Value};
use tracing::debug;

use crate::canonical::values_equal;
use crate::error::{DiffError, DiffResult};
use crate::record::{DiffSet, Difference};
use crate::renames::detect_renames;

/// Default nesting limit applied by [`DiffOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for a bounded comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    /// Maximum number of nested object and array levels in either document.
    /// The root container is level 1. `None` walks without limit, which is
    /// only safe for input of known depth.
    pub max_depth: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl DiffOptions {
    /// Walk without a depth limit.
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }
}

/// Compare two documents without a depth limit.
///
/// Documents parsed by `serde_json` are nested at most 128 levels deep, so
/// this is safe for anything read from text. For deeper values built in
/// memory use [`diff_values_with_options`].
///
/// If either root is not an object, the two roots are compared as a single
/// leaf pair at the empty path.
pub fn diff_values(old: &Value, new: &Value) -> DiffSet {
    let mut walker = Walker {
        records: Vec::new(),
    };
    walker.compare_present(ROOT_PATH.to_string(), old, new);

    let diff = DiffSet {
        records: walker.records,
    };
    debug!(
        records = diff.len(),
        changes = diff.summary().changes(),
        "compared JSON documents"
    );
    diff
}

/// Compare two documents, failing if either nests deeper than
/// `options.max_depth`.
///
/// Both documents are measured before any comparison starts, so a deep
/// subtree fails here whether it sits under a shared, renamed or one-sided
/// key.
pub fn diff_values_with_options(
    old: &Value,
    new: &Value,
    options: &DiffOptions,
) -> DiffResult<DiffSet> {
    if let Some(limit) = options.max_depth {
        check_depth(old, limit)?;
        check_depth(new, limit)?;
    }
    Ok(diff_values(old, new))
}

/// Walk `root` with an explicit stack and fail at the first container
/// nested deeper than `limit`. A container past the limit is never
/// expanded, so the work is bounded by the allowed depth.
fn check_depth(root: &Value, limit: usize) -> DiffResult<()> {
    let mut stack: Vec<(&Value, String, usize)> = vec![(root, ROOT_PATH.to_string(), 1)];
    while let Some((value, path, level)) = stack.pop() {
        let is_container = matches!(value, Value::Object(_) | Value::Array(_));
        if is_container && level > limit {
            return Err(DiffError::DepthExceeded { path, limit });
        }
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    stack.push((child, join_path(&path, key), level + 1));
                }
            }
            Value::Array(items) => {
                for item in items.iter().rev() {
                    stack.push((item, path.clone(), level + 1));
                }
            }
            _ => {}
        }
    }
    Ok(())
}

struct Walker {
    records: Vec<Difference>,
}

impl Walker {
    /// Classify a key present on both sides.
    fn compare_present(&mut self, path: String, old: &Value, new: &Value) {
        if is_empty_string(old) || is_empty_string(new) {
            self.records.push(Difference::EmptyValue {
                path,
                old_value: old.clone(),
                new_value: new.clone(),
                old_type: classify(old),
                new_type: classify(new),
                is_empty_in_old: is_empty_string(old),
                is_empty_in_new: is_empty_string(new),
            });
            return;
        }

        if let (Value::Object(old_map), Value::Object(new_map)) = (old, new) {
            self.walk_level(old_map, new_map, &path);
            return;
        }

        if values_equal(old, new) {
            self.records.push(Difference::Unchanged {
                path,
                value: old.clone(),
            });
        } else {
            self.records.push(Difference::Modified {
                path,
                old_value: old.clone(),
                new_value: new.clone(),
                old_type: classify(old),
                new_type: classify(new),
            });
        }
    }

    fn walk_level(&mut self, old: &Map<String, Value>, new: &Map<String, Value>, parent: &str) {
        let renames = detect_renames(old, new, parent);

        for (key, old_value) in old {
            let path = join_path(parent, key);
            match new.get(key) {
                Some(new_value) => self.compare_present(path, old_value, new_value),
                None if renames.iter().any(|r| r.old_key == *key) => {}
                None => self.records.push(Difference::Removed {
                    path,
                    value: old_value.clone(),
                    value_type: classify(old_value),
                    is_empty_string: is_empty_string(old_value),
                }),
            }
        }

        for (key, new_value) in new {
            if old.contains_key(key) {
                continue;
            }
            let path = join_path(parent, key);
            match renames.iter().find(|r| r.new_key == *key) {
                Some(rename) => self.records.push(Difference::KeyChanged {
                    path,
                    old_path: rename.old_path.clone(),
                    old_key: rename.old_key.clone(),
                    new_key: key.clone(),
                    old_value: rename.old_value.clone(),
                    new_value: new_value.clone(),
                    value_type: classify(new_value),
                }),
                None => self.records.push(Difference::Added {
                    path,
                    value: new_value.clone(),
                    value_type: classify(new_value),
                    is_empty_string: is_empty_string(new_value),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use jsoncmp_types::{DiffStatus, ValueType};
    use proptest::prelude::*;
    use serde_json::json;

    fn statuses(diff: &DiffSet) -> Vec<(String, DiffStatus)> {
        diff.records
            .iter()
            .map(|r| (r.path().to_string(), r.status()))
            .collect()
    }

    #[test]
    fn rename_instead_of_add_and_remove() {
        let diff = diff_values(&json!({"a": "x"}), &json!({"b": "x"}));
        assert_eq!(diff.len(), 1);
        match &diff.records[0] {
            Difference::KeyChanged {
                path,
                old_path,
                old_key,
                new_key,
                value_type,
                ..
            } => {
                assert_eq!(path, "b");
                assert_eq!(old_path, "a");
                assert_eq!(old_key, "a");
                assert_eq!(new_key, "b");
                assert_eq!(*value_type, ValueType::String);
            }
            other => panic!("expected KeyChanged, got {:?}", other),
        }
    }

    #[test]
    fn empty_value_beats_modified() {
        let diff = diff_values(&json!({"k": ""}), &json!({"k": "hello"}));
        assert_eq!(diff.len(), 1);
        match &diff.records[0] {
            Difference::EmptyValue {
                path,
                is_empty_in_old,
                is_empty_in_new,
                old_type,
                new_type,
                ..
            } => {
                assert_eq!(path, "k");
                assert!(*is_empty_in_old);
                assert!(!*is_empty_in_new);
                assert_eq!(*old_type, ValueType::String);
                assert_eq!(*new_type, ValueType::String);
            }
            other => panic!("expected EmptyValue, got {:?}", other),
        }
    }

    #[test]
    fn empty_value_beats_recursion() {
        let diff = diff_values(&json!({"k": {"x": 1}}), &json!({"k": ""}));
        assert_eq!(statuses(&diff), vec![("k".to_string(), DiffStatus::EmptyValue)]);
    }

    #[test]
    fn empty_on_both_sides_is_still_flagged() {
        let diff = diff_values(&json!({"k": ""}), &json!({"k": ""}));
        assert_eq!(statuses(&diff), vec![("k".to_string(), DiffStatus::EmptyValue)]);
    }

    #[test]
    fn nested_objects_recurse_without_parent_record() {
        let diff = diff_values(&json!({"a": {"b": 1}}), &json!({"a": {"b": 2}}));
        assert_eq!(statuses(&diff), vec![("a.b".to_string(), DiffStatus::Modified)]);
    }

    #[test]
    fn arrays_are_leaves() {
        let diff = diff_values(&json!({"a": [1, 2]}), &json!({"a": [1, 2, 3]}));
        assert_eq!(statuses(&diff), vec![("a".to_string(), DiffStatus::Modified)]);
        match &diff.records[0] {
            Difference::Modified { old_type, new_type, .. } => {
                assert_eq!(*old_type, ValueType::Array);
                assert_eq!(*new_type, ValueType::Array);
            }
            other => panic!("expected Modified, got {:?}", other),
        }
    }

    #[test]
    fn arrays_of_objects_are_not_walked() {
        let diff = diff_values(&json!({"a": [{"x": 1}]}), &json!({"a": [{"x": 2}]}));
        assert_eq!(statuses(&diff), vec![("a".to_string(), DiffStatus::Modified)]);
    }

    #[test]
    fn type_mismatch_is_modified() {
        let diff = diff_values(&json!({"n": 42}), &json!({"n": "42"}));
        assert_eq!(statuses(&diff), vec![("n".to_string(), DiffStatus::Modified)]);
    }

    #[test]
    fn object_versus_null_is_a_leaf_pair() {
        let diff = diff_values(&json!({"o": {"x": 1}}), &json!({"o": null}));
        assert_eq!(statuses(&diff), vec![("o".to_string(), DiffStatus::Modified)]);
    }

    #[test]
    fn reordered_object_keys_are_unchanged() {
        let diff = diff_values(&json!({"a": {"x": 1, "y": 2}}), &json!({"a": {"y": 2, "x": 1}}));
        assert!(!diff.has_changes());
        assert_eq!(diff.count(DiffStatus::Unchanged), 2);
    }

    #[test]
    fn added_and_removed_without_matching_values() {
        let diff = diff_values(&json!({"gone": 1, "same": true}), &json!({"same": true, "fresh": ""}));
        assert_eq!(
            statuses(&diff),
            vec![
                ("gone".to_string(), DiffStatus::Removed),
                ("same".to_string(), DiffStatus::Unchanged),
                ("fresh".to_string(), DiffStatus::Added),
            ]
        );
        match &diff.records[2] {
            Difference::Added { is_empty_string, .. } => assert!(*is_empty_string),
            other => panic!("expected Added, got {:?}", other),
        }
    }

    #[test]
    fn renames_stay_within_their_level() {
        let old = json!({"left": {"a": "x"}, "right": {}});
        let new = json!({"left": {}, "right": {"b": "x"}});
        let diff = diff_values(&old, &new);
        assert_eq!(
            statuses(&diff),
            vec![
                ("left.a".to_string(), DiffStatus::Removed),
                ("right.b".to_string(), DiffStatus::Added),
            ]
        );
    }

    #[test]
    fn nested_rename_uses_full_paths() {
        let diff = diff_values(&json!({"m": {"old": 7}}), &json!({"m": {"new": 7}}));
        match &diff.records[0] {
            Difference::KeyChanged { path, old_path, .. } => {
                assert_eq!(path, "m.new");
                assert_eq!(old_path, "m.old");
            }
            other => panic!("expected KeyChanged, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_old_values_collapse_onto_one_rename() {
        let diff = diff_values(&json!({"a": "v", "b": "v"}), &json!({"c": "v"}));
        assert_eq!(statuses(&diff), vec![("c".to_string(), DiffStatus::KeyChanged)]);
        match &diff.records[0] {
            Difference::KeyChanged { old_key, .. } => assert_eq!(old_key, "a"),
            other => panic!("expected KeyChanged, got {:?}", other),
        }
    }

    #[test]
    fn non_object_roots_compare_as_one_leaf() {
        let diff = diff_values(&json!([1]), &json!([2]));
        assert_eq!(statuses(&diff), vec![(String::new(), DiffStatus::Modified)]);

        let diff = diff_values(&json!("same"), &json!("same"));
        assert_eq!(statuses(&diff), vec![(String::new(), DiffStatus::Unchanged)]);
    }

    #[test]
    fn empty_objects_produce_no_records() {
        assert!(diff_values(&json!({}), &json!({})).is_empty());
        assert!(diff_values(&json!({"a": {}}), &json!({"a": {}})).is_empty());
    }

    #[test]
    fn depth_limit_is_enforced() {
        let deep = json!({"a": {"b": {"c": 1}}});
        let options = DiffOptions { max_depth: Some(2) };
        let err = diff_values_with_options(&deep, &deep, &options).unwrap_err();
        assert_eq!(
            err,
            DiffError::DepthExceeded {
                path: "a.b".into(),
                limit: 2
            }
        );

        let options = DiffOptions { max_depth: Some(3) };
        let diff = diff_values_with_options(&deep, &deep, &options).unwrap();
        assert_eq!(diff.count(DiffStatus::Unchanged), 1);
    }

    #[test]
    fn default_options_allow_ordinary_documents() {
        let doc = json!({"a": {"b": {"c": {"d": [1, 2, 3]}}}});
        let diff = diff_values_with_options(&doc, &doc, &DiffOptions::default()).unwrap();
        assert_eq!(diff, diff_values(&doc, &doc));
    }

    /// A single chain of `depth` objects, built without recursion.
    fn nested(depth: usize) -> Value {
        let mut value = json!(1);
        for _ in 0..depth {
            let mut map = Map::new();
            map.insert("n".into(), value);
            value = Value::Object(map);
        }
        value
    }

    /// Drop a deep value without recursing through it.
    fn dismantle(value: Value) {
        let mut stack = vec![value];
        while let Some(mut value) = stack.pop() {
            match &mut value {
                Value::Object(map) => stack.extend(std::mem::take(map).into_iter().map(|(_, v)| v)),
                Value::Array(items) => stack.append(items),
                _ => {}
            }
        }
    }

    fn assert_too_deep(result: DiffResult<DiffSet>) {
        match result {
            Err(DiffError::DepthExceeded { limit, .. }) => assert_eq!(limit, DEFAULT_MAX_DEPTH),
            other => panic!("expected DepthExceeded, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn deep_subtree_under_one_sided_key_is_rejected() {
        let old = json!({"x": nested(100_000)});
        let new = json!({});
        assert_too_deep(diff_values_with_options(&old, &new, &DiffOptions::default()));
        assert_too_deep(diff_values_with_options(&new, &old, &DiffOptions::default()));
        dismantle(old);
    }

    #[test]
    fn deep_subtree_under_renamed_key_is_rejected() {
        let old = json!({"a": nested(100_000)});
        let new = json!({"b": nested(100_000)});
        assert_too_deep(diff_values_with_options(&old, &new, &DiffOptions::default()));
        dismantle(old);
        dismantle(new);
    }

    #[test]
    fn arrays_count_toward_depth() {
        let doc = json!({"a": [[1]]});
        let options = DiffOptions { max_depth: Some(2) };
        let err = diff_values_with_options(&doc, &doc, &options).unwrap_err();
        assert_eq!(
            err,
            DiffError::DepthExceeded {
                path: "a".into(),
                limit: 2
            }
        );
        let options = DiffOptions { max_depth: Some(3) };
        assert!(diff_values_with_options(&doc, &doc, &options).is_ok());
    }

    #[test]
    fn depth_is_reported_at_the_first_level_past_the_limit() {
        let old = json!({"keep": 1});
        let new = json!({"keep": 1, "added": {"inner": {"leaf": true}}});
        let options = DiffOptions { max_depth: Some(2) };
        let err = diff_values_with_options(&old, &new, &options).unwrap_err();
        assert_eq!(
            err,
            DiffError::DepthExceeded {
                path: "added.inner".into(),
                limit: 2
            }
        );
    }

    fn arb_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-20i64..20).prop_map(Value::from),
            "[a-z]{1,3}".prop_map(Value::String),
        ]
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        arb_leaf().prop_recursive(4, 48, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
                prop::collection::btree_map("[a-e]", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn arb_document() -> impl Strategy<Value = Value> {
        prop::collection::btree_map("[a-e]", arb_json(), 0..5)
            .prop_map(|m| Value::Object(m.into_iter().collect()))
    }

    proptest! {
        #[test]
        fn self_comparison_is_all_unchanged(doc in arb_document()) {
            let diff = diff_values(&doc, &doc);
            prop_assert!(diff.records.iter().all(|r| r.status() == DiffStatus::Unchanged));
        }

        #[test]
        fn categories_are_mutually_exclusive(old in arb_document(), new in arb_document()) {
            let diff = diff_values(&old, &new);
            let mut seen: HashMap<&str, HashSet<DiffStatus>> = HashMap::new();
            for record in &diff.records {
                seen.entry(record.path()).or_default().insert(record.status());
            }
            prop_assert!(seen.values().all(|s| s.len() == 1));
        }

        #[test]
        fn comparison_is_deterministic(old in arb_document(), new in arb_document()) {
            prop_assert_eq!(diff_values(&old, &new), diff_values(&old, &new));
        }
    }
}
