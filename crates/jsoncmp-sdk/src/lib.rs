//! High-level SDK for jsoncmp.
//!
//! Provides a unified API for applications embedding the comparison engine:
//! load two documents, compare them once, then project filtered panes,
//! summaries, and reports from the memoized result.

pub mod batch;
pub mod comparison;
pub mod error;
pub mod loader;

pub use batch::{pair_directories, DirectoryPairing, FilePair};
pub use comparison::Comparison;
pub use error::{SdkError, SdkResult};
pub use loader::{load_json, parse_json};

// Re-export key types
pub use jsoncmp_diff::{DiffOptions, DiffSet, Difference, Summary};
pub use jsoncmp_report::Report;
pub use jsoncmp_types::{DiffStatus, Side, ValueType};
pub use jsoncmp_view::{Filter, Line, PaneRow, Panes};
