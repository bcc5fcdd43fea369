//! A memoized comparison of two documents.

use std::path::Path;

use jsoncmp_diff::{diff_values, diff_values_with_options, DiffOptions, DiffSet, Summary};
use jsoncmp_report::Report;
use jsoncmp_types::Side;
use jsoncmp_view::{filter_lines, Filter, Line, Panes};
use serde_json::Value;
use tracing::info;

use crate::error::SdkResult;
use crate::loader::load_json;

/// Two documents, their diff, and both rendered panes.
///
/// The diff and the panes are computed once at construction; every filter,
/// summary, and report is a projection of that result. Comparing a different
/// pair of documents means building a new `Comparison`.
#[derive(Clone, Debug)]
pub struct Comparison {
    old: Value,
    new: Value,
    diff: DiffSet,
    panes: Panes,
}

impl Comparison {
    /// Compare two in-memory documents without a depth limit.
    pub fn new(old: Value, new: Value) -> Self {
        let diff = diff_values(&old, &new);
        Self::assemble(old, new, diff)
    }

    /// Compare two in-memory documents under `options`.
    pub fn with_options(old: Value, new: Value, options: &DiffOptions) -> SdkResult<Self> {
        let diff = diff_values_with_options(&old, &new, options)?;
        Ok(Self::assemble(old, new, diff))
    }

    /// Load and compare two JSON files.
    pub fn from_files(old_path: &Path, new_path: &Path, options: &DiffOptions) -> SdkResult<Self> {
        let old = load_json(old_path)?;
        let new = load_json(new_path)?;
        let comparison = Self::with_options(old, new, options)?;
        info!(
            old = %old_path.display(),
            new = %new_path.display(),
            changes = comparison.summary().changes(),
            "compared files"
        );
        Ok(comparison)
    }

    fn assemble(old: Value, new: Value, diff: DiffSet) -> Self {
        let panes = Panes::render(&old, &new, &diff);
        Self {
            old,
            new,
            diff,
            panes,
        }
    }

    /// The document on `side`.
    pub fn document(&self, side: Side) -> &Value {
        match side {
            Side::Old => &self.old,
            Side::New => &self.new,
        }
    }

    pub fn diff(&self) -> &DiffSet {
        &self.diff
    }

    /// Both panes, unfiltered.
    pub fn panes(&self) -> &Panes {
        &self.panes
    }

    /// Lines of one side that pass `filter`.
    pub fn lines(&self, side: Side, filter: Filter) -> Vec<Line> {
        filter_lines(self.panes.side(side), filter)
    }

    pub fn summary(&self) -> Summary {
        self.diff.summary()
    }

    /// Build a report naming the two compared files.
    pub fn report(&self, file1: impl Into<String>, file2: impl Into<String>) -> Report {
        Report::build(&self.diff, file1, file2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsoncmp_types::DiffStatus;
    use serde_json::json;

    use crate::error::SdkError;

    fn comparison() -> Comparison {
        Comparison::new(
            json!({"greeting": "Hello", "farewell": "", "count": 1}),
            json!({"salutation": "Hello", "farewell": "Tchau", "count": 2}),
        )
    }

    #[test]
    fn summary_reflects_diff() {
        let summary = comparison().summary();
        assert_eq!(summary.key_changed, 1);
        assert_eq!(summary.empty_value, 1);
        assert_eq!(summary.modified, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn lines_are_filtered_per_side() {
        let cmp = comparison();
        let left = cmp.lines(Side::Old, Filter::Status(DiffStatus::KeyChanged));
        let right = cmp.lines(Side::New, Filter::Status(DiffStatus::KeyChanged));
        assert_eq!(left[0].path, "greeting");
        assert_eq!(right[0].path, "salutation");
        assert_eq!(cmp.lines(Side::Old, Filter::All).len(), 3);
    }

    #[test]
    fn report_names_files() {
        let report = comparison().report("en.json", "pt.json");
        assert_eq!(report.metadata.file1, "en.json");
        assert_eq!(report.metadata.total_entries, 3);
        assert_eq!(report.differences.key_changed[0].new_key, "salutation");
    }

    #[test]
    fn depth_limit_surfaces_as_error() {
        let deep = json!({"a": {"b": {"c": 1}}});
        let options = DiffOptions { max_depth: Some(1) };
        let err = Comparison::with_options(deep.clone(), deep, &options).unwrap_err();
        assert!(matches!(err, SdkError::Diff(_)));
    }

    #[test]
    fn compares_files() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.json");
        let new = dir.path().join("new.json");
        std::fs::write(&old, r#"{"a": 1}"#).unwrap();
        std::fs::write(&new, r#"{"a": 1, "b": 2}"#).unwrap();

        let cmp = Comparison::from_files(&old, &new, &DiffOptions::default()).unwrap();
        assert_eq!(cmp.summary().added, 1);
        assert_eq!(cmp.document(Side::New), &json!({"a": 1, "b": 2}));
    }

    #[test]
    fn malformed_file_never_reaches_the_engine() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.json");
        let new = dir.path().join("new.json");
        std::fs::write(&old, "{").unwrap();
        std::fs::write(&new, "{}").unwrap();

        let err = Comparison::from_files(&old, &new, &DiffOptions::default()).unwrap_err();
        assert!(matches!(err, SdkError::Parse { .. }));
    }
}
