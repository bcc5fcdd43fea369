//! Comparison reports for jsoncmp.
//!
//! Projects a [`DiffSet`](jsoncmp_diff::DiffSet) into the JSON report shape
//! consumed by downstream tooling:
//! `{metadata, summary, differences}`, with one list per category.

pub mod error;
pub mod report;

pub use error::{ReportError, ReportResult};
pub use report::{
    report_file_name, Differences, EmptyValueEntry, KeyChangedEntry, KeyEntry, Metadata,
    ModifiedEntry, Report, UnchangedEntry,
};
