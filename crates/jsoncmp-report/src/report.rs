//! The report document and its per-category entries.

use chrono::{DateTime, SecondsFormat, Utc};
use jsoncmp_diff::{DiffSet, Difference, Summary};
use jsoncmp_types::ValueType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReportResult;

/// A full comparison report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub metadata: Metadata,
    pub summary: Summary,
    pub differences: Differences,
}

/// Who was compared, and when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// RFC 3339 timestamp with millisecond precision, in UTC.
    pub generated_at: String,
    pub file1: String,
    pub file2: String,
    /// Total number of records across all categories.
    pub total_entries: usize,
}

/// Records grouped by category, each list in walk order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Differences {
    pub added: Vec<KeyEntry>,
    pub removed: Vec<KeyEntry>,
    pub modified: Vec<ModifiedEntry>,
    pub key_changed: Vec<KeyChangedEntry>,
    pub empty_value: Vec<EmptyValueEntry>,
    pub unchanged: Vec<UnchangedEntry>,
}

/// A key present on one side only. Used by both the `added` and `removed`
/// lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEntry {
    pub path: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub is_empty: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedEntry {
    pub path: String,
    pub old_value: Value,
    pub new_value: Value,
    pub old_type: ValueType,
    pub new_type: ValueType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyChangedEntry {
    pub old_path: String,
    pub new_path: String,
    pub old_key: String,
    pub new_key: String,
    pub old_value: Value,
    pub new_value: Value,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyValueEntry {
    pub path: String,
    pub old_value: Value,
    pub new_value: Value,
    pub old_type: ValueType,
    pub new_type: ValueType,
    pub is_empty_in_file1: bool,
    pub is_empty_in_file2: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnchangedEntry {
    pub path: String,
    pub value: Value,
}

impl Differences {
    /// Group the records of `diff` by category.
    pub fn from_diff(diff: &DiffSet) -> Self {
        let mut out = Self::default();
        for record in &diff.records {
            match record.clone() {
                Difference::Added {
                    path,
                    value,
                    value_type,
                    is_empty_string,
                } => out.added.push(KeyEntry {
                    path,
                    value,
                    value_type,
                    is_empty: is_empty_string,
                }),
                Difference::Removed {
                    path,
                    value,
                    value_type,
                    is_empty_string,
                } => out.removed.push(KeyEntry {
                    path,
                    value,
                    value_type,
                    is_empty: is_empty_string,
                }),
                Difference::Modified {
                    path,
                    old_value,
                    new_value,
                    old_type,
                    new_type,
                } => out.modified.push(ModifiedEntry {
                    path,
                    old_value,
                    new_value,
                    old_type,
                    new_type,
                }),
                Difference::KeyChanged {
                    path,
                    old_path,
                    old_key,
                    new_key,
                    old_value,
                    new_value,
                    value_type,
                } => out.key_changed.push(KeyChangedEntry {
                    old_path,
                    new_path: path,
                    old_key,
                    new_key,
                    old_value,
                    new_value,
                    value_type,
                }),
                Difference::EmptyValue {
                    path,
                    old_value,
                    new_value,
                    old_type,
                    new_type,
                    is_empty_in_old,
                    is_empty_in_new,
                } => out.empty_value.push(EmptyValueEntry {
                    path,
                    old_value,
                    new_value,
                    old_type,
                    new_type,
                    is_empty_in_file1: is_empty_in_old,
                    is_empty_in_file2: is_empty_in_new,
                }),
                Difference::Unchanged { path, value } => {
                    out.unchanged.push(UnchangedEntry { path, value })
                }
            }
        }
        out
    }
}

impl Report {
    /// Build a report stamped with the current time.
    pub fn build(diff: &DiffSet, file1: impl Into<String>, file2: impl Into<String>) -> Self {
        Self::build_at(diff, file1, file2, Utc::now())
    }

    /// Build a report stamped with `generated_at`.
    pub fn build_at(
        diff: &DiffSet,
        file1: impl Into<String>,
        file2: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let summary = diff.summary();
        Self {
            metadata: Metadata {
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                file1: file1.into(),
                file2: file2.into(),
                total_entries: summary.total(),
            },
            summary,
            differences: Differences::from_diff(diff),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report previously produced by [`Report::to_json_pretty`].
    pub fn from_json(text: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Default download name for a report generated at `at`, e.g.
/// `comparison-report_2024-05-01T09-30-00.json`.
pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("comparison-report_{}.json", at.format("%Y-%m-%dT%H-%M-%S"))
}
