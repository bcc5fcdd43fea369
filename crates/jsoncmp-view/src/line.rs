use jsoncmp_types::DiffStatus;
use serde::Serialize;
use serde_json::Value;

/// A single rendered line of one pane.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    /// Dotted path of the value.
    pub path: String,
    /// The value shown on this side.
    pub value: Value,
    /// Difference status resolved for this side.
    pub status: DiffStatus,
    /// Indented `"key": value` text; may span several lines.
    pub display: String,
}

impl Line {
    /// Gutter marker for this line's status.
    pub fn glyph(&self) -> char {
        self.status.glyph()
    }

    /// Number of text lines `display` occupies.
    pub fn height(&self) -> usize {
        self.display.lines().count().max(1)
    }
}
