//! Writing a rendered component to disk

use crate::templates::info::GeneratedFileSet;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write every file of the set into `target_dir`, in set order.
///
/// The directory is created if needed. A failed write aborts the rest; files
/// already written are left in place.
pub async fn write_component(target_dir: &Path, files: &GeneratedFileSet) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut written = Vec::with_capacity(files.files.len());

    for file in &files.files {
        let target_path = target_dir.join(file.file_name());
        fs::write(&target_path, &file.contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        written.push(target_path);
    }

    Ok(written)
}

/// Number of entries already present in `dir` (0 if it does not exist)
pub fn existing_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.count())
        .unwrap_or(0)
}
