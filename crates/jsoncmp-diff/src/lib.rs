//! Comparison engine for jsoncmp.
//!
//! Walks two JSON trees in lock-step and classifies every key into one of six
//! mutually exclusive categories, pairing orphaned keys with equal values as
//! renames.
//!
//! # Key Types
//!
//! - [`DiffSet`] / [`Difference`] -- Categorized difference records keyed by dotted path
//! - [`KeyRename`] -- A proposed `old key -> new key` pairing at one object level
//! - [`FlatTree`] -- One tree reduced to `path -> leaf value`
//! - [`Summary`] -- Per-category record counts

pub mod canonical;
pub mod error;
pub mod flatten;
pub mod record;
pub mod renames;
pub mod tree_diff;

pub use canonical::{canonical_string, normalize_numbers, values_equal};
pub use error::{DiffError, DiffResult};
pub use flatten::{flatten, FlatTree};
pub use record::{DiffSet, Difference, Summary};
pub use renames::{detect_renames, KeyRename};
pub use tree_diff::{diff_values, diff_values_with_options, DiffOptions, DEFAULT_MAX_DEPTH};
