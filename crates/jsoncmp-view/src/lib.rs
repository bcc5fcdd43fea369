//! Line rendering for jsoncmp.
//!
//! Turns one side of a comparison into an ordered sequence of display lines,
//! one per dotted path, each tagged with its difference status. The two
//! sides are rendered independently and can be filtered by status.
//!
//! # Key Types
//!
//! - [`Line`] -- One rendered `path: value` line with its status
//! - [`Filter`] -- `all`, or a single [`DiffStatus`](jsoncmp_types::DiffStatus)
//! - [`Panes`] / [`PaneRow`] -- Old and new line sequences, zipped row by row

pub mod filter;
pub mod format;
pub mod line;
pub mod panes;
pub mod render;

pub use filter::{filter_lines, Filter};
pub use format::{escape_string, format_path_value, format_value};
pub use line::Line;
pub use panes::{PaneRow, Panes};
pub use render::render_lines;
