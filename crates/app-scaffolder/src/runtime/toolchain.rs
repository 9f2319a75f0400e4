//! External tools the pipeline drives: package manager and native platform CLI

use super::command::{node_program, run_streaming};
use crate::config::ProjectConfig;
use crate::platform::{self, PlatformTarget};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Collaborators that install packages and manage native sub-projects
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Install runtime packages into the project at `dir`
    async fn install(&self, dir: &Path, packages: &[String]) -> Result<()>;

    /// Generate the native project skeleton for `target`
    async fn add_platform(&self, target: PlatformTarget, config: &ProjectConfig) -> Result<()>;

    /// Copy web assets and plugins into the native project for `target`
    async fn sync_platform(&self, target: PlatformTarget, config: &ProjectConfig) -> Result<()>;

    /// Rewrite identity settings (bundle id, display name) in the native project
    async fn edit_project_settings(
        &self,
        target: PlatformTarget,
        config: &ProjectConfig,
    ) -> Result<()> {
        platform::edit::edit_project_settings(target, config).await
    }
}

/// Toolchain backed by `npm` and the native CLI run through `npx`
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    package_manager: String,
    native_cli: Vec<String>,
}

impl Default for SystemToolchain {
    fn default() -> Self {
        Self {
            package_manager: node_program("npm"),
            native_cli: vec![node_program("npx"), "cap".to_string()],
        }
    }
}

impl SystemToolchain {
    pub fn install_args(packages: &[String]) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        if !packages.is_empty() {
            args.push("--save".to_string());
            args.extend(packages.iter().cloned());
        }
        args
    }

    /// Packages `cap add <target>` refuses to run without
    pub fn platform_packages(target: PlatformTarget) -> Vec<String> {
        vec![target.package_name().to_string()]
    }

    /// Full argument list for a native CLI action, program first
    pub fn native_command(&self, action: &str, target: PlatformTarget) -> Vec<String> {
        let mut command = self.native_cli.clone();
        command.push(action.to_string());
        command.push(target.cli_name().to_string());
        command
    }

    async fn run_native(&self, action: &str, target: PlatformTarget, cwd: &Path) -> Result<()> {
        let command = self.native_command(action, target);
        let (program, args) = command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("No native CLI configured"))?;
        run_streaming(program, args, cwd).await
    }
}

#[async_trait]
impl Toolchain for SystemToolchain {
    async fn install(&self, dir: &Path, packages: &[String]) -> Result<()> {
        run_streaming(&self.package_manager, &Self::install_args(packages), dir).await
    }

    async fn add_platform(&self, target: PlatformTarget, config: &ProjectConfig) -> Result<()> {
        self.install(config.root(), &Self::platform_packages(target))
            .await?;
        self.run_native("add", target, config.root()).await
    }

    async fn sync_platform(&self, target: PlatformTarget, config: &ProjectConfig) -> Result<()> {
        self.run_native("sync", target, config.root()).await
    }
}
