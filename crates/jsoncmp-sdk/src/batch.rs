//! Pairing JSON files across two directory trees.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{SdkError, SdkResult};

/// A file present under both roots at the same relative path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePair {
    pub relative: PathBuf,
    pub old: PathBuf,
    pub new: PathBuf,
}

/// The result of matching two directory trees by relative path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryPairing {
    /// Files found on both sides, sorted by relative path.
    pub pairs: Vec<FilePair>,
    /// Relative paths present only under the old root.
    pub only_old: Vec<PathBuf>,
    /// Relative paths present only under the new root.
    pub only_new: Vec<PathBuf>,
}

impl DirectoryPairing {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.only_old.is_empty() && self.only_new.is_empty()
    }
}

/// Match every `*.json` file under `old_dir` with its counterpart under
/// `new_dir`.
pub fn pair_directories(old_dir: &Path, new_dir: &Path) -> SdkResult<DirectoryPairing> {
    let old_files = collect_json_files(old_dir)?;
    let new_files = collect_json_files(new_dir)?;

    let pairs = old_files
        .intersection(&new_files)
        .map(|relative| FilePair {
            relative: relative.clone(),
            old: old_dir.join(relative),
            new: new_dir.join(relative),
        })
        .collect::<Vec<_>>();
    let only_old = old_files.difference(&new_files).cloned().collect::<Vec<_>>();
    let only_new = new_files.difference(&old_files).cloned().collect::<Vec<_>>();

    debug!(
        pairs = pairs.len(),
        only_old = only_old.len(),
        only_new = only_new.len(),
        "paired directories"
    );

    Ok(DirectoryPairing {
        pairs,
        only_old,
        only_new,
    })
}

fn collect_json_files(root: &Path) -> SdkResult<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| SdkError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_json(entry.path()) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.insert(relative.to_path_buf());
        }
    }
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
