//! Product configuration trait for CLI binaries
//!
//! A binary implements this trait to name itself, point at its bundled
//! starter template and documentation, and phrase its closing instructions.

use crate::platform::PlatformTarget;
use std::path::{Path, PathBuf};

/// Configuration trait for scaffolding products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Template directory used when neither a flag nor the env override is set
    fn default_template_dir(&self) -> PathBuf;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, platforms: &[PlatformTarget]) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
