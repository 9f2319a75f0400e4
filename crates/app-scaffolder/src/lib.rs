//! App Scaffolder - core library for the `create-app` CLI
//!
//! Scaffolds a cross-platform app workspace: validates inputs, prompts for
//! whatever is missing, creates the directory, writes `capacitor.config.json`,
//! copies the starter template, installs its runtime packages, and adds the
//! native iOS (macOS hosts only) and Android projects.
//!
//! # Architecture
//!
//! - **Stage operations** - `validate`, `resolve`, `workspace`, `config`,
//!   `templates`, `platform`: one module per pipeline stage
//! - **Orchestration** - `pipeline::Orchestrator` runs the stages in order
//!   through `step::StepRunner`, stopping at the first `ScaffoldError`
//! - **Seams** - `Prompter`, `Reporter`, and `Toolchain` traits so the
//!   pipeline runs against scripted collaborators in tests
//! - **CLI/TUI Interface** - optional cliclack front end (feature `tui`)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and reporter

pub mod config;
pub mod error;
pub mod pipeline;
pub mod platform;
pub mod product;
pub mod resolve;
pub mod runtime;
pub mod step;
pub mod templates;
pub mod validate;
pub mod workspace;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{HostOs, ProjectConfig};
pub use error::{FailureKind, ScaffoldError, ScaffoldResult};
pub use pipeline::{Orchestrator, PipelineContext, RunState, Stage, Summary};
pub use platform::PlatformTarget;
pub use product::ProductConfig;
pub use resolve::{Field, Inputs, Prompter};
pub use runtime::{SystemToolchain, Toolchain};
pub use step::{Reporter, StepRunner};

#[cfg(feature = "tui")]
pub use tui::run;
