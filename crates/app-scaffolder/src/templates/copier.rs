//! Recursive template copy into a fresh workspace

use super::manifest::MANIFEST_FILE;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy every file under `template_dir` into `target_dir`.
///
/// The template's own manifest is skipped. Returns the copied files as
/// `/`-separated paths relative to the template root, in walk order.
pub async fn copy_template(template_dir: &Path, target_dir: &Path) -> Result<Vec<String>> {
    if !template_dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", template_dir.display());
    }

    let mut copied_files = Vec::new();

    for entry in WalkDir::new(template_dir)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to read template {}", template_dir.display()))?;
        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .context("Template entry outside template root")?;

        if relative == Path::new(MANIFEST_FILE) {
            continue;
        }

        let target_path = target_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .with_context(|| format!("Failed to create directory: {}", target_path.display()))?;
            continue;
        }

        // Ensure parent directories exist
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::copy(entry.path(), &target_path)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        copied_files.push(relative.to_string_lossy().replace('\\', "/"));
    }

    Ok(copied_files)
}
