//! Target directory creation

use crate::error::{ScaffoldError, ScaffoldResult};
use std::path::Path;
use tokio::fs;

/// Create the workspace directory, refusing to reuse an existing path
pub async fn provision(path: &Path) -> ScaffoldResult<()> {
    let exists = fs::try_exists(path).await.map_err(|e| {
        ScaffoldError::operational(format!("Failed to check {}: {}", path.display(), e))
    })?;
    if exists {
        return Err(ScaffoldError::operational(format!(
            "Directory {} already exists",
            path.display()
        )));
    }

    fs::create_dir(path).await.map_err(|e| {
        ScaffoldError::operational(format!(
            "Failed to create directory {}: {}",
            path.display(),
            e
        ))
    })
}
