//! The old and new panes of a side-by-side view.

use jsoncmp_diff::DiffSet;
use jsoncmp_types::Side;
use serde::Serialize;
use serde_json::Value;

use crate::filter::{filter_lines, Filter};
use crate::line::Line;
use crate::render::render_lines;

/// Both rendered sides of one comparison.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Panes {
    pub old: Vec<Line>,
    pub new: Vec<Line>,
}

/// One row of the side-by-side view. Rows pair lines by position; either side
/// may run out first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneRow<'a> {
    /// Zero-based row number.
    pub index: usize,
    pub old: Option<&'a Line>,
    pub new: Option<&'a Line>,
}

impl Panes {
    /// Render both sides of `diff`.
    pub fn render(old_tree: &Value, new_tree: &Value, diff: &DiffSet) -> Self {
        Self {
            old: render_lines(old_tree, diff, Side::Old),
            new: render_lines(new_tree, diff, Side::New),
        }
    }

    /// Lines of one side.
    pub fn side(&self, side: Side) -> &[Line] {
        match side {
            Side::Old => &self.old,
            Side::New => &self.new,
        }
    }

    /// Apply the same filter to both panes independently.
    pub fn filtered(&self, filter: Filter) -> Self {
        Self {
            old: filter_lines(&self.old, filter),
            new: filter_lines(&self.new, filter),
        }
    }

    /// Number of rows in the side-by-side view.
    pub fn row_count(&self) -> usize {
        self.old.len().max(self.new.len())
    }

    /// Pair the two panes row by row.
    pub fn rows(&self) -> impl Iterator<Item = PaneRow<'_>> {
        (0..self.row_count()).map(move |index| PaneRow {
            index,
            old: self.old.get(index),
            new: self.new.get(index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsoncmp_diff::diff_values;
    use jsoncmp_types::DiffStatus;
    use serde_json::json;

    fn panes() -> Panes {
        let old = json!({"a": 1, "b": "x", "gone": true});
        let new = json!({"a": 2, "b": "x"});
        Panes::render(&old, &new, &diff_values(&old, &new))
    }

    #[test]
    fn rows_cover_the_longer_pane() {
        let panes = panes();
        assert_eq!(panes.old.len(), 3);
        assert_eq!(panes.new.len(), 2);

        let rows: Vec<PaneRow<'_>> = panes.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[2].old.is_some());
        assert!(rows[2].new.is_none());
    }

    #[test]
    fn filter_applies_to_both_sides() {
        let modified = panes().filtered(Filter::Status(DiffStatus::Modified));
        assert_eq!(modified.old.len(), 1);
        assert_eq!(modified.new.len(), 1);
        assert_eq!(modified.side(Side::New)[0].value, json!(2));

        let removed = panes().filtered(Filter::Status(DiffStatus::Removed));
        assert_eq!(removed.old.len(), 1);
        assert!(removed.new.is_empty());
    }
}
