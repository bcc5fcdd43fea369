//! Difference categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The six mutually exclusive categories a path can fall into.
///
/// The variant order is the order categories are listed in summaries and
/// reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffStatus {
    /// Key present only on the new side.
    Added,
    /// Key present only on the old side.
    Removed,
    /// Key on both sides with differing values.
    Modified,
    /// Key renamed: an orphaned old key paired with an orphaned new key of equal value.
    KeyChanged,
    /// Key on both sides and at least one value is `""`.
    EmptyValue,
    /// Key on both sides with equal values.
    Unchanged,
}

impl DiffStatus {
    /// Every status, in summary order.
    pub const ALL: [DiffStatus; 6] = [
        Self::Added,
        Self::Removed,
        Self::Modified,
        Self::KeyChanged,
        Self::EmptyValue,
        Self::Unchanged,
    ];

    /// Wire name, as used in reports and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
            Self::KeyChanged => "keyChanged",
            Self::EmptyValue => "emptyValue",
            Self::Unchanged => "unchanged",
        }
    }

    /// Single-character marker shown in the gutter of a pane.
    pub fn glyph(&self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Modified => '~',
            Self::KeyChanged => '↔',
            Self::EmptyValue => '∅',
            Self::Unchanged => ' ',
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Removed => "Removed",
            Self::Modified => "Modified values",
            Self::KeyChanged => "Changed keys",
            Self::EmptyValue => "Empty values",
            Self::Unchanged => "Unchanged",
        }
    }

    /// Returns `true` for every status except [`DiffStatus::Unchanged`].
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffStatus {
    type Err = TypeError;

    /// Accepts the wire name as well as kebab- and snake-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "added" => Ok(Self::Added),
            "removed" => Ok(Self::Removed),
            "modified" => Ok(Self::Modified),
            "keychanged" => Ok(Self::KeyChanged),
            "emptyvalue" => Ok(Self::EmptyValue),
            "unchanged" => Ok(Self::Unchanged),
            _ => Err(TypeError::UnknownStatus(s.to_string())),
        }
    }
}
