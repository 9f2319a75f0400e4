//! Native platform bootstrap (add, sync, edit)
//!
//! The bootstrap runs in two passes. First each eligible platform is added
//! and synced, iOS before Android; then each gets its project settings
//! edited, again iOS first. Edits need the native skeleton on disk, which is
//! why they come after every add. iOS is only eligible on macOS hosts.

pub mod edit;

use crate::config::{HostOs, ProjectConfig};
use crate::error::ScaffoldResult;
use crate::runtime::Toolchain;
use crate::step::StepRunner;
use std::fmt;

/// A native sub-project the scaffolder can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTarget {
    Ios,
    Android,
}

impl PlatformTarget {
    /// Bootstrap order
    pub const ALL: [PlatformTarget; 2] = [PlatformTarget::Ios, PlatformTarget::Android];

    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformTarget::Ios => "iOS",
            PlatformTarget::Android => "Android",
        }
    }

    /// Name passed to the native CLI (`cap add ios`)
    pub fn cli_name(&self) -> &'static str {
        match self {
            PlatformTarget::Ios => "ios",
            PlatformTarget::Android => "android",
        }
    }

    /// npm package the native CLI needs installed before `add`
    pub fn package_name(&self) -> &'static str {
        match self {
            PlatformTarget::Ios => "@capacitor/ios",
            PlatformTarget::Android => "@capacitor/android",
        }
    }

    pub fn is_eligible(&self, host: HostOs) -> bool {
        match self {
            PlatformTarget::Ios => host.is_macos(),
            PlatformTarget::Android => true,
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformAction {
    Add,
    Sync,
    Edit,
}

/// One entry of the bootstrap plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapStep {
    pub action: PlatformAction,
    pub target: PlatformTarget,
}

impl BootstrapStep {
    pub fn description(&self) -> String {
        match self.action {
            PlatformAction::Add => format!("Adding {} platform", self.target),
            PlatformAction::Sync => format!("Syncing {} platform", self.target),
            PlatformAction::Edit => format!("Updating {} project settings", self.target),
        }
    }
}

/// Platforms bootstrapped on `host`, in order
pub fn eligible_platforms(host: HostOs) -> Vec<PlatformTarget> {
    PlatformTarget::ALL
        .into_iter()
        .filter(|target| target.is_eligible(host))
        .collect()
}

/// Ordered add/sync pass followed by the edit pass
pub fn bootstrap_plan(host: HostOs) -> Vec<BootstrapStep> {
    let platforms = eligible_platforms(host);

    let setup = platforms.iter().flat_map(|&target| {
        [PlatformAction::Add, PlatformAction::Sync]
            .into_iter()
            .map(move |action| BootstrapStep { action, target })
    });
    let edits = platforms.iter().map(|&target| BootstrapStep {
        action: PlatformAction::Edit,
        target,
    });

    setup.chain(edits).collect()
}

/// Execute the bootstrap plan for the config's host, stopping at the first failure
pub async fn bootstrap(
    toolchain: &dyn Toolchain,
    runner: &StepRunner<'_>,
    config: &ProjectConfig,
) -> ScaffoldResult<Vec<PlatformTarget>> {
    for step in bootstrap_plan(config.host_os()) {
        let description = step.description();
        match step.action {
            PlatformAction::Add => {
                runner
                    .run(&description, toolchain.add_platform(step.target, config))
                    .await?
            }
            PlatformAction::Sync => {
                runner
                    .run(&description, toolchain.sync_platform(step.target, config))
                    .await?
            }
            PlatformAction::Edit => {
                runner
                    .run(
                        &description,
                        toolchain.edit_project_settings(step.target, config),
                    )
                    .await?
            }
        }
    }

    Ok(eligible_platforms(config.host_os()))
}
