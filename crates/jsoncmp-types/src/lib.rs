//! Foundation types for jsoncmp.
//!
//! This crate provides the small vocabulary shared by every other jsoncmp
//! crate: the semantic type of a JSON value, dotted paths, the six difference
//! categories, and the two sides of a comparison.
//!
//! # Key Types
//!
//! - [`ValueType`]: Semantic type tag of a JSON value ([`classify`])
//! - [`DiffStatus`]: One of the six mutually exclusive difference categories
//! - [`Side`]: The old (left) or new (right) side of a comparison
//! - [`path`]: Dotted path helpers (`a.b.c`, never descending into arrays)

pub mod error;
pub mod path;
pub mod side;
pub mod status;
pub mod value_type;

pub use error::TypeError;
pub use path::{join_path, leaf_key, path_depth, ROOT_PATH};
pub use side::Side;
pub use status::DiffStatus;
pub use value_type::{classify, is_empty_string, ValueType};
