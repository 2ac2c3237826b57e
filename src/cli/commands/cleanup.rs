use anyhow::Result;
use std::path::PathBuf;

use crate::cleanup::{FolderFilter, remove_folders, select_folders};
use crate::fs::{PathKind, expect_kind};
use crate::report::Reporter;

pub struct CleanupOptions {
    pub root: PathBuf,
    pub debug: bool,
}

/// Runs the `dec` command: selects generated output folders under the root
/// and deletes them, no confirmation.
pub fn run_cleanup(options: CleanupOptions) -> Result<()> {
    let reporter = Reporter::new(options.debug);

    expect_kind(&options.root, PathKind::Directory)?;

    let filter = FolderFilter::generated_outputs();
    let folders = select_folders(&options.root, &filter)?;

    if folders.is_empty() {
        reporter.advise(format!(
            "nothing to clean up under {}",
            options.root.display()
        ));
        return Ok(());
    }

    let removed = remove_folders(&folders, reporter);
    reporter.success(format!("✓ removed {removed} generated folder(s)"));

    Ok(())
}
