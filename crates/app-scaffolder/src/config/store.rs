//! Load-or-create for the persisted app config (`capacitor.config.json`)
//!
//! The native platform CLI reads this file by name when adding and syncing
//! platforms, so the name and key spelling are fixed.

use super::ProjectConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// File name of the persisted config at the workspace root
pub const CONFIG_FILE_NAME: &str = "capacitor.config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPath {
    pub path: String,
}

/// On-disk representation of the project config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedConfig {
    pub app_id: String,
    pub app_name: String,
    #[serde(default)]
    pub web_dir: Option<String>,
    #[serde(default)]
    pub bundled_web_runtime: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<PlatformPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<PlatformPath>,
}

impl PersistedConfig {
    fn from_project(config: &ProjectConfig) -> Self {
        Self {
            app_id: config.app_id().to_string(),
            app_name: config.app_name().to_string(),
            web_dir: Some(config.platforms.web_dir.clone()),
            bundled_web_runtime: config.bundled_web_runtime,
            ios: Some(PlatformPath {
                path: config.platforms.ios_path.clone(),
            }),
            android: Some(PlatformPath {
                path: config.platforms.android_path.clone(),
            }),
        }
    }
}

/// Load the persisted config if present, otherwise create it.
///
/// An existing file contributes its web dir and platform paths to `config`;
/// identity fields always come from memory and are written back, so the two
/// agree on app id and name afterwards. Returns the path of the file.
pub async fn get_or_create_config(config: &mut ProjectConfig) -> Result<PathBuf> {
    let path = config.working_directory.join(CONFIG_FILE_NAME);

    if fs::try_exists(&path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?
    {
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let existing: PersistedConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(web_dir) = existing.web_dir {
            config.platforms.web_dir = web_dir;
        }
        if let Some(ios) = existing.ios {
            config.platforms.ios_path = ios.path;
        }
        if let Some(android) = existing.android {
            config.platforms.android_path = android.path;
        }
    }

    let persisted = PersistedConfig::from_project(config);
    let json = serde_json::to_string_pretty(&persisted).context("Failed to serialize config")?;
    fs::write(&path, format!("{}\n", json))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
