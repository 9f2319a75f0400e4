//! Template manifest types and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the manifest file at the root of a template directory
pub const MANIFEST_FILE: &str = "template.yaml";

/// Per-template manifest (`<template>/template.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,

    /// Runtime packages installed into the generated project
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TemplateManifest {
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse template manifest")
    }

    /// Read `template.yaml` from a template directory
    pub async fn load(template_dir: &Path) -> Result<Self> {
        let path = template_dir.join(MANIFEST_FILE);
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }
}
