//! Render one side of a comparison into path-sorted lines.

use std::collections::{BTreeSet, HashMap};

use jsoncmp_diff::{flatten, DiffSet, Difference};
use jsoncmp_types::{DiffStatus, Side};
use serde_json::Value;

use crate::format::format_path_value;
use crate::line::Line;

/// Produce the display lines for `side`, given that side's tree.
///
/// The line set is the union of the tree's flattened leaf paths and every
/// record path relevant to `side`, sorted lexicographically by path string.
/// A path covered by a record takes that record's status and this side's
/// value; any other path is an unchanged leaf. Lines whose value is `null`
/// are dropped.
pub fn render_lines(tree: &Value, diff: &DiffSet, side: Side) -> Vec<Line> {
    let flat = flatten(tree);
    let index = index_side(diff, side);

    let paths: BTreeSet<&str> = flat
        .keys()
        .map(String::as_str)
        .chain(index.keys().copied())
        .collect();

    paths
        .into_iter()
        .filter_map(|path| {
            let (status, value) = match index.get(path) {
                Some(record) => (record.status(), side_value(record, side)?),
                None => (DiffStatus::Unchanged, *flat.get(path)?),
            };
            if value.is_null() {
                return None;
            }
            Some(Line {
                path: path.to_string(),
                value: value.clone(),
                status,
                display: format_path_value(path, value),
            })
        })
        .collect()
}

/// Map each path visible on `side` to the record that owns it. When several
/// records claim one path, the higher-precedence category wins.
fn index_side(diff: &DiffSet, side: Side) -> HashMap<&str, &Difference> {
    let mut index: HashMap<&str, &Difference> = HashMap::new();
    for record in &diff.records {
        let Some(rank) = precedence(record.status(), side) else {
            continue;
        };
        let path = match side {
            Side::Old => record.old_path(),
            Side::New => record.new_path(),
        };
        let Some(path) = path else {
            continue;
        };
        let replace = match index.get(path) {
            Some(existing) => precedence(existing.status(), side).is_some_and(|r| rank < r),
            None => true,
        };
        if replace {
            index.insert(path, record);
        }
    }
    index
}

/// Lower ranks win. `None` for categories that never appear on `side`.
fn precedence(status: DiffStatus, side: Side) -> Option<u8> {
    match (status, side) {
        (DiffStatus::KeyChanged, _) => Some(0),
        (DiffStatus::Removed, Side::Old) | (DiffStatus::Added, Side::New) => Some(1),
        (DiffStatus::EmptyValue, _) => Some(2),
        (DiffStatus::Modified, _) => Some(3),
        (DiffStatus::Unchanged, _) => Some(4),
        (DiffStatus::Removed, Side::New) | (DiffStatus::Added, Side::Old) => None,
    }
}

fn side_value(record: &Difference, side: Side) -> Option<&Value> {
    match side {
        Side::Old => record.old_value(),
        Side::New => record.new_value(),
    }
}
