use std::fmt;
use std::str::FromStr;

use jsoncmp_types::{DiffStatus, TypeError};

use crate::line::Line;

/// Which lines a pane shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Status(DiffStatus),
}

impl Filter {
    /// Returns `true` if a line with `status` passes this filter.
    pub fn matches(&self, status: DiffStatus) -> bool {
        match self {
            Self::All => true,
            Self::Status(wanted) => *wanted == status,
        }
    }

    /// Selecting the active status again clears the filter.
    pub fn toggle(self, status: DiffStatus) -> Self {
        if self == Self::Status(status) {
            Self::All
        } else {
            Self::Status(status)
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Status(status) => status.label(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for Filter {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Status)
    }
}

impl From<DiffStatus> for Filter {
    fn from(status: DiffStatus) -> Self {
        Self::Status(status)
    }
}

/// Keep the lines that pass `filter`, preserving order.
pub fn filter_lines(lines: &[Line], filter: Filter) -> Vec<Line> {
    lines
        .iter()
        .filter(|line| filter.matches(line.status))
        .cloned()
        .collect()
}
