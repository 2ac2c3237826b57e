//! Output directory and file path resolution.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::params::OutputParameters;

/// Resolves the output directory for one target language.
///
/// With `dynamic_folder` the language gets its own subfolder under the base
/// directory; otherwise every language shares the base directory.
pub fn directory_for(params: &OutputParameters, language: &str) -> PathBuf {
    if params.dynamic_folder {
        params.directory.join(language)
    } else {
        params.directory.clone()
    }
}

/// Resolves the output file path for one target language.
pub fn file_for(params: &OutputParameters, language: &str) -> PathBuf {
    let name = params.name.as_deref().unwrap_or(language);
    directory_for(params, language).join(format!("{name}.{}", params.extension))
}

/// Creates the output directory (and all missing ancestors) when it does not
/// already exist.
///
/// Returns whether a "created" notification should be emitted: the directory
/// did not previously exist, or `forced` is set. `forced` only affects
/// notification semantics; file writes overwrite either way.
pub fn ensure_directory(directory: &Path, forced: bool) -> Result<bool> {
    let existed = directory.exists();

    if !existed || forced {
        fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create directory: {}", directory.display()))?;
    }

    Ok(!existed || forced)
}
