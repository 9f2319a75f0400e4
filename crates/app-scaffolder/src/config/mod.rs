//! Project configuration aggregate and its on-disk form

pub mod store;

pub use store::{get_or_create_config, PersistedConfig, CONFIG_FILE_NAME};

use crate::platform::PlatformTarget;
use std::fmt;
use std::path::{Path, PathBuf};

/// Operating system the scaffolder is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl HostOs {
    /// Detect the host from the compile target
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            "windows" => HostOs::Windows,
            _ => HostOs::Other,
        }
    }

    pub fn is_macos(&self) -> bool {
        matches!(self, HostOs::MacOs)
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostOs::MacOs => "macOS",
            HostOs::Linux => "Linux",
            HostOs::Windows => "Windows",
            HostOs::Other => "unknown OS",
        };
        write!(f, "{}", name)
    }
}

/// Per-platform settings nested in the project config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Directory holding the built web assets
    pub web_dir: String,
    /// Native iOS project directory, relative to the workspace root
    pub ios_path: String,
    /// Native Android project directory, relative to the workspace root
    pub android_path: String,
    pub host_os: HostOs,
}

impl PlatformConfig {
    pub fn for_host(host_os: HostOs) -> Self {
        Self {
            web_dir: "www".to_string(),
            ios_path: "ios".to_string(),
            android_path: "android".to_string(),
            host_os,
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::for_host(HostOs::detect())
    }
}

/// Configuration for one scaffolding run
///
/// Owned by the orchestrator and handed to collaborators by reference. Fields
/// are only ever set or overwritten during a run, never rolled back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub working_directory: PathBuf,
    pub app_name: Option<String>,
    pub app_id: Option<String>,
    pub bundled_web_runtime: bool,
    pub platforms: PlatformConfig,
}

impl ProjectConfig {
    pub fn for_host(host_os: HostOs) -> Self {
        Self {
            platforms: PlatformConfig::for_host(host_os),
            ..Self::default()
        }
    }

    pub fn host_os(&self) -> HostOs {
        self.platforms.host_os
    }

    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or_default()
    }

    pub fn app_id(&self) -> &str {
        self.app_id.as_deref().unwrap_or_default()
    }

    pub fn root(&self) -> &Path {
        &self.working_directory
    }

    /// Relative directory name of a platform's native project
    pub fn platform_path(&self, target: PlatformTarget) -> &str {
        match target {
            PlatformTarget::Ios => &self.platforms.ios_path,
            PlatformTarget::Android => &self.platforms.android_path,
        }
    }

    /// Absolute location of a platform's native project
    pub fn platform_dir(&self, target: PlatformTarget) -> PathBuf {
        self.working_directory.join(self.platform_path(target))
    }
}
