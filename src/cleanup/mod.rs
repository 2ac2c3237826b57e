//! Selection and deletion of generated output folders.
//!
//! Candidates are the unique parent directories of every file discovered
//! under the scan root, so only folders that actually contain content are
//! ever considered. A compound predicate then keeps destructive selection
//! away from shallow organizational folders and protected content.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::Result;

use crate::fs::{parent_folders, walk_files};
use crate::report::Reporter;
use crate::ui::Style;

/// Root folder the `dec` command scans when none is given.
pub const DEFAULT_CLEANUP_ROOT: &str = "environments";

/// Shallow folders are never deleted; only paths at least this deep qualify.
const MIN_DEPTH: usize = 3;

/// A folder containing every one of these substrings at once is protected.
const PROTECTED_COMBINATION: &[&str] = &["dir", "default"];

/// A folder containing any of these substrings is protected.
const PROTECTED_MARKERS: &[&str] = &["CHANGELOG"];

/// Compound folder-matching predicate.
///
/// The predicate is a conjunction of independent sub-predicates over the
/// folder's path string; each one is vacuously true when its criteria set is
/// empty.
#[derive(Debug, Clone, Default)]
pub struct FolderFilter {
    /// Minimum number of normal path components.
    pub min_depth: usize,
    /// Must contain every substring.
    pub all: Vec<String>,
    /// Must contain at least one substring.
    pub any: Vec<String>,
    /// Must not contain every substring simultaneously.
    pub not_all: Vec<String>,
    /// Must not contain any substring.
    pub not_any: Vec<String>,
}

impl FolderFilter {
    /// The filter used by `dec`: deep folders only, sparing anything that
    /// looks like a default/dir marker combination or changelog content.
    pub fn generated_outputs() -> Self {
        Self {
            min_depth: MIN_DEPTH,
            not_all: to_strings(PROTECTED_COMBINATION),
            not_any: to_strings(PROTECTED_MARKERS),
            ..Self::default()
        }
    }

    /// Evaluates the predicate against one folder path.
    pub fn matches(&self, folder: &Path) -> bool {
        let text = folder.to_string_lossy();
        let contains = |needle: &String| text.contains(needle.as_str());

        depth(folder) >= self.min_depth
            && self.all.iter().all(contains)
            && (self.any.is_empty() || self.any.iter().any(contains))
            && (self.not_all.is_empty() || !self.not_all.iter().all(contains))
            && !self.not_any.iter().any(contains)
    }
}

/// Path depth: the count of normal components, ignoring root and prefix
/// components.
fn depth(folder: &Path) -> usize {
    folder
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .count()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Surfaces every folder under `root` that contains at least one file and
/// passes `filter`, preserving discovery order.
///
/// # Errors
///
/// Returns an error if the tree cannot be traversed.
pub fn select_folders(root: &Path, filter: &FolderFilter) -> Result<Vec<PathBuf>> {
    let files = walk_files(root, |_| true)?;
    let mut folders = parent_folders(&files);
    folders.retain(|folder| filter.matches(folder));
    Ok(folders)
}

/// Deletes the selected folders recursively and unconditionally.
///
/// A folder that fails to delete is reported and skipped; the rest of the
/// selection still proceeds. Returns the number of folders removed.
pub fn remove_folders(folders: &[PathBuf], reporter: Reporter) -> usize {
    let mut removed = 0;

    for folder in folders {
        // an earlier removal may have taken this folder with it
        if !folder.exists() {
            continue;
        }

        match fs::remove_dir_all(folder) {
            Ok(()) => {
                reporter.trace(format!("removed {}", Style::path(folder.display())));
                removed += 1;
            }
            Err(error) => {
                reporter.error(format!("[{}]: {error}", folder.display()));
            }
        }
    }

    removed
}
