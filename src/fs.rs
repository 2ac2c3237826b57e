//! File system utilities shared by the batch and cleanup pipelines.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The kind of filesystem entry a command expects its input path to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// Verifies that `path` exists and is of the expected kind.
///
/// # Errors
///
/// Returns an error if the path cannot be inspected (missing, permission
/// denied) or if its kind does not match `kind`. Callers report the error and
/// end that invocation; nothing is read and no tasks are created.
pub fn expect_kind(path: &Path, kind: PathKind) -> Result<()> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to inspect path: {}", path.display()))?;

    let matches = match kind {
        PathKind::File => metadata.is_file(),
        PathKind::Directory => metadata.is_dir(),
    };

    if !matches {
        bail!(
            "Invalid path: {} is not a {}",
            path.display(),
            kind.describe()
        );
    }

    Ok(())
}

/// Recursively collects every regular file under `root` that passes `keep`.
///
/// Descends depth-first into every subdirectory with no depth limit and no
/// symlink following. File order is the walker's natural enumeration order,
/// stable within one invocation.
pub fn walk_files<F>(root: &Path, mut keep: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path) -> bool,
{
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;

        if entry.file_type().is_file() {
            let path = entry.into_path();
            if keep(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Derives the unique set of immediate parent directories of `files`,
/// preserving first-seen order.
///
/// This is how folders containing at least one matching file are surfaced
/// without enumerating directories directly.
pub fn parent_folders(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut folders: Vec<PathBuf> = Vec::new();

    for file in files {
        if let Some(parent) = file.parent()
            && !folders.iter().any(|seen| seen == parent)
        {
            folders.push(parent.to_path_buf());
        }
    }

    folders
}

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created in the same directory as the target file so the
/// rename stays on one filesystem. Existing files are overwritten.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}
