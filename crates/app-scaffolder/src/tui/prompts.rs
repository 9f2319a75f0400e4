//! Charm-style CLI front end using cliclack

use crate::config::ProjectConfig;
use crate::error::ScaffoldResult;
use crate::pipeline::{Orchestrator, PipelineContext, RunState, Summary};
use crate::product::ProductConfig;
use crate::resolve::{BlankPrompter, Field, Inputs, Prompter};
use crate::runtime::SystemToolchain;
use crate::step::{PlainReporter, Reporter};
use crate::templates::resolve_template_dir;
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create
    pub directory: Option<String>,

    /// App display name
    pub app_name: Option<String>,

    /// App package id (reverse-domain)
    pub app_id: Option<String>,

    /// Local template directory to use instead of the bundled one
    pub template_dir: Option<PathBuf>,

    /// Never prompt; blank inputs take their defaults
    pub yes: bool,
}

/// Asks for missing inputs with inline cliclack prompts
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn prompt(&mut self, field: Field) -> anyhow::Result<String> {
        let answer: String = cliclack::input(field.question())
            .placeholder(field.placeholder())
            .required(false)
            .interact()?;
        Ok(answer)
    }
}

/// Reports steps as cliclack log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackReporter;

impl Reporter for CliclackReporter {
    fn step_started(&self, description: &str) {
        let _ = cliclack::log::step(format!("{}...", description));
    }

    fn step_succeeded(&self, description: &str) {
        let _ = cliclack::log::success(description);
    }

    fn info(&self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warning(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }
}

/// Run the scaffolding pipeline with interactive prompts (or none, with `yes`)
pub async fn run<C: ProductConfig>(
    config: &C,
    args: CreateArgs,
    cli_version: &str,
) -> ScaffoldResult<Summary> {
    let interactive = !args.yes;
    if interactive {
        cliclack::intro(config.display_name())?;
    }

    let template_dir = resolve_template_dir(config, args.template_dir.as_deref());
    let inputs = Inputs::new(args.directory, args.app_name, args.app_id);
    let mut ctx = PipelineContext::new(inputs, ProjectConfig::default(), template_dir);

    let toolchain = SystemToolchain::default();
    let (mut prompter, reporter): (Box<dyn Prompter>, Box<dyn Reporter>) = if interactive {
        (Box::new(CliclackPrompter), Box::new(CliclackReporter))
    } else {
        (Box::new(BlankPrompter), Box::new(PlainReporter))
    };

    if ctx.config.host_os().is_macos() {
        reporter.info("macOS detected: iOS and Android projects will be generated");
    } else {
        reporter.info(&format!(
            "{} detected: only the Android project will be generated",
            ctx.config.host_os()
        ));
    }

    let mut orchestrator = Orchestrator::new(
        config,
        &toolchain,
        prompter.as_mut(),
        reporter.as_ref(),
        cli_version,
    );
    let result = orchestrator.run(&mut ctx).await;

    if let RunState::Failed(stage) = orchestrator.state().current() {
        reporter.info(&format!("Stopped while {}", stage));
    }
    let summary = result?;

    print_summary(&summary, interactive)?;
    Ok(summary)
}

fn print_summary(summary: &Summary, interactive: bool) -> ScaffoldResult<()> {
    println!();
    println!("  {}", summary.headline().green().bold());
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in summary.next_steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  {}", summary.docs_line().dimmed());

    if interactive {
        cliclack::outro("Happy coding!")?;
    }

    Ok(())
}
