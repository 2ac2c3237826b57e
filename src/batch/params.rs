use std::path::{Path, PathBuf};

/// Built-in output directory, used when nothing else applies.
pub const DEFAULT_DIRECTORY: &str = "output";

/// Built-in output file extension.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Output options after merging CLI arguments over the config file, before
/// defaulting. `None` means "nothing explicitly supplied".
#[derive(Debug, Clone, Default)]
pub struct OutputOverrides {
    pub directory: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub dynamic_folder: Option<bool>,
    pub forced: bool,
    pub test: bool,
}

/// Immutable output configuration for one invocation.
///
/// Defaulting is resolved once at construction; no component mutates the
/// value afterwards. Directory batches derive one copy per file via
/// [`OutputParameters::for_file`].
#[derive(Debug, Clone)]
pub struct OutputParameters {
    /// Base directory for generated files.
    pub directory: PathBuf,
    /// Whether each language gets its own subfolder under `directory`.
    pub dynamic_folder: bool,
    /// Fixed file name; the language code is used when absent.
    pub name: Option<String>,
    /// Extension for generated files.
    pub extension: String,
    /// Re-announce directory creation even when it already exists.
    pub forced: bool,
    /// Skip the provider call and reuse the input text as the translation.
    pub test: bool,
}

impl OutputParameters {
    /// Resolves the final parameters from merged overrides and the input
    /// source.
    ///
    /// When no directory was explicitly supplied and the input came from a
    /// filesystem path, output lands next to the source (the parent of the
    /// input path). An explicitly supplied directory always wins; inline text
    /// input falls back to the built-in default.
    pub fn resolve(overrides: OutputOverrides, source: Option<&Path>) -> Self {
        let directory = overrides.directory.map_or_else(
            || {
                source.map_or_else(|| PathBuf::from(DEFAULT_DIRECTORY), parent_or_current)
            },
            PathBuf::from,
        );

        Self {
            directory,
            dynamic_folder: overrides.dynamic_folder.unwrap_or(true),
            name: overrides.name,
            extension: overrides
                .extension
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            forced: overrides.forced,
            test: overrides.test,
        }
    }

    /// Derives the parameters for one file of a directory batch.
    ///
    /// When the batch processes more than one file and no explicit name
    /// override exists, the file's stem becomes the output name so sibling
    /// sources do not collide.
    pub fn for_file(&self, stem: &str, total_files: usize) -> Self {
        let mut params = self.clone();
        if total_files > 1 && params.name.is_none() {
            params.name = Some(stem.to_string());
        }
        params
    }
}

fn parent_or_current(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
