//! Starter template loading, copying, and version checks
//!
//! A template is a directory tree with a `template.yaml` manifest at its
//! root. The tree (minus the manifest) is copied verbatim into the new
//! workspace; the manifest declares the runtime packages to install.

pub mod copier;
pub mod manifest;
pub mod version;

use crate::product::ProductConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use copier::copy_template;
pub use manifest::{TemplateManifest, MANIFEST_FILE};
pub use version::check_compatibility;

/// A template directory together with its parsed manifest
#[derive(Debug, Clone)]
pub struct Template {
    pub root: PathBuf,
    pub manifest: TemplateManifest,
}

impl Template {
    pub async fn load(root: &Path) -> Result<Self> {
        let manifest = TemplateManifest::load(root).await?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }
}

/// Pick the template directory: explicit path, then env override, then product default
pub fn resolve_template_dir<C: ProductConfig>(config: &C, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(config.template_dir_env()) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => config.default_template_dir(),
    }
}
