//! Difference records produced by the tree differ.

use jsoncmp_types::{DiffStatus, ValueType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The result of comparing two JSON documents.
///
/// Records appear in walk order: at each object level, keys of the old side in
/// insertion order, followed by keys only present on the new side. Every path
/// appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DiffSet {
    /// The categorized records.
    pub records: Vec<Difference>,
}

impl DiffSet {
    /// Returns `true` if there are no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if any record is something other than [`DiffStatus::Unchanged`].
    pub fn has_changes(&self) -> bool {
        self.records.iter().any(|r| r.status().is_change())
    }

    /// Records of one category, in walk order.
    pub fn with_status(&self, status: DiffStatus) -> impl Iterator<Item = &Difference> {
        self.records.iter().filter(move |r| r.status() == status)
    }

    /// Number of records of one category.
    pub fn count(&self, status: DiffStatus) -> usize {
        self.with_status(status).count()
    }

    /// Per-category counts.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for record in &self.records {
            match record.status() {
                DiffStatus::Added => summary.added += 1,
                DiffStatus::Removed => summary.removed += 1,
                DiffStatus::Modified => summary.modified += 1,
                DiffStatus::KeyChanged => summary.key_changed += 1,
                DiffStatus::EmptyValue => summary.empty_value += 1,
                DiffStatus::Unchanged => summary.unchanged += 1,
            }
        }
        summary
    }
}

/// Per-category record counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub key_changed: usize,
    pub empty_value: usize,
    pub unchanged: usize,
}

impl Summary {
    /// Count for one category.
    pub fn get(&self, status: DiffStatus) -> usize {
        match status {
            DiffStatus::Added => self.added,
            DiffStatus::Removed => self.removed,
            DiffStatus::Modified => self.modified,
            DiffStatus::KeyChanged => self.key_changed,
            DiffStatus::EmptyValue => self.empty_value,
            DiffStatus::Unchanged => self.unchanged,
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        DiffStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// Sum over every category except unchanged.
    pub fn changes(&self) -> usize {
        self.total() - self.unchanged
    }
}

/// A single categorized difference, keyed by dotted path.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Difference {
    /// Key present only on the new side and not attributable to a rename.
    #[serde(rename_all = "camelCase")]
    Added {
        path: String,
        value: Value,
        value_type: ValueType,
        is_empty_string: bool,
    },
    /// Key present only on the old side and not attributable to a rename.
    #[serde(rename_all = "camelCase")]
    Removed {
        path: String,
        value: Value,
        value_type: ValueType,
        is_empty_string: bool,
    },
    /// Key on both sides whose values differ and neither is `""`.
    #[serde(rename_all = "camelCase")]
    Modified {
        path: String,
        old_value: Value,
        new_value: Value,
        old_type: ValueType,
        new_type: ValueType,
    },
    /// An orphaned old key paired with an orphaned new key holding an equal value.
    /// `path` is the new key's path.
    #[serde(rename_all = "camelCase")]
    KeyChanged {
        path: String,
        old_path: String,
        old_key: String,
        new_key: String,
        old_value: Value,
        new_value: Value,
        value_type: ValueType,
    },
    /// Key on both sides where at least one value is the empty string.
    #[serde(rename_all = "camelCase")]
    EmptyValue {
        path: String,
        old_value: Value,
        new_value: Value,
        old_type: ValueType,
        new_type: ValueType,
        is_empty_in_old: bool,
        is_empty_in_new: bool,
    },
    /// Key on both sides with equal values.
    #[serde(rename_all = "camelCase")]
    Unchanged { path: String, value: Value },
}

impl Difference {
    /// The category of this record.
    pub fn status(&self) -> DiffStatus {
        match self {
            Self::Added { .. } => DiffStatus::Added,
            Self::Removed { .. } => DiffStatus::Removed,
            Self::Modified { .. } => DiffStatus::Modified,
            Self::KeyChanged { .. } => DiffStatus::KeyChanged,
            Self::EmptyValue { .. } => DiffStatus::EmptyValue,
            Self::Unchanged { .. } => DiffStatus::Unchanged,
        }
    }

    /// The path this record is attributed to (the new path for renames).
    pub fn path(&self) -> &str {
        match self {
            Self::Added { path, .. }
            | Self::Removed { path, .. }
            | Self::Modified { path, .. }
            | Self::KeyChanged { path, .. }
            | Self::EmptyValue { path, .. }
            | Self::Unchanged { path, .. } => path.as_str(),
        }
    }

    /// The path this record occupies on the old side, if any.
    pub fn old_path(&self) -> Option<&str> {
        match self {
            Self::Added { .. } => None,
            Self::KeyChanged { old_path, .. } => Some(old_path.as_str()),
            other => Some(other.path()),
        }
    }

    /// The path this record occupies on the new side, if any.
    pub fn new_path(&self) -> Option<&str> {
        match self {
            Self::Removed { .. } => None,
            other => Some(other.path()),
        }
    }

    /// The value shown for this record on the old side, if any.
    pub fn old_value(&self) -> Option<&Value> {
        match self {
            Self::Added { .. } => None,
            Self::Removed { value, .. } | Self::Unchanged { value, .. } => Some(value),
            Self::Modified { old_value, .. }
            | Self::KeyChanged { old_value, .. }
            | Self::EmptyValue { old_value, .. } => Some(old_value),
        }
    }

    /// The value shown for this record on the new side, if any.
    pub fn new_value(&self) -> Option<&Value> {
        match self {
            Self::Removed { .. } => None,
            Self::Added { value, .. } | Self::Unchanged { value, .. } => Some(value),
            Self::Modified { new_value, .. }
            | Self::KeyChanged { new_value, .. }
            | Self::EmptyValue { new_value, .. } => Some(new_value),
        }
    }
}
