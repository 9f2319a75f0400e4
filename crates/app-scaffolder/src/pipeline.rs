//! The scaffolding pipeline
//!
//! `Orchestrator::run` walks `Stage::PIPELINE` in order, handing the same
//! `PipelineContext` to each stage and stopping at the first failure. Every
//! stage before `Provisioning` is read-only, so a validation failure leaves
//! the filesystem untouched. Nothing is rolled back after that point.

use crate::config::{get_or_create_config, ProjectConfig, CONFIG_FILE_NAME};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::platform::{self, PlatformTarget};
use crate::product::ProductConfig;
use crate::resolve::{resolve_inputs, Inputs, Prompter, ResolvedInputs};
use crate::runtime::Toolchain;
use crate::step::{Reporter, StepRunner};
use crate::templates::{self, Template};
use crate::validate::{config_checks, input_checks, run_checks};
use crate::workspace;
use std::fmt;
use std::path::PathBuf;

/// A pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Resolving,
    Provisioning,
    Materializing,
    Templating,
    Bootstrapping,
    Reporting,
}

impl Stage {
    pub const PIPELINE: [Stage; 7] = [
        Stage::Validating,
        Stage::Resolving,
        Stage::Provisioning,
        Stage::Materializing,
        Stage::Templating,
        Stage::Bootstrapping,
        Stage::Reporting,
    ];

    /// The stage after this one, `None` for the last
    pub fn next(&self) -> Option<Stage> {
        let idx = Self::PIPELINE.iter().position(|s| s == self)?;
        Self::PIPELINE.get(idx + 1).copied()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Resolving => "resolving",
            Stage::Provisioning => "provisioning",
            Stage::Materializing => "materializing",
            Stage::Templating => "templating",
            Stage::Bootstrapping => "bootstrapping",
            Stage::Reporting => "reporting",
        };
        write!(f, "{}", name)
    }
}

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    Running(Stage),
    Done,
    Failed(Stage),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed(_))
    }

    /// Whether `self -> next` is a legal transition
    pub fn can_move_to(&self, next: RunState) -> bool {
        match (*self, next) {
            (RunState::Start, RunState::Running(stage)) => stage == Stage::PIPELINE[0],
            (RunState::Running(current), RunState::Running(stage)) => {
                current.next() == Some(stage)
            }
            (RunState::Running(current), RunState::Done) => current.next().is_none(),
            (RunState::Running(current), RunState::Failed(stage)) => current == stage,
            _ => false,
        }
    }
}

/// Tracks the current state and every state visited
#[derive(Debug, Clone)]
pub struct StateMachine {
    current: RunState,
    history: Vec<RunState>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self {
            current: RunState::Start,
            history: vec![RunState::Start],
        }
    }
}

impl StateMachine {
    pub fn current(&self) -> RunState {
        self.current
    }

    pub fn history(&self) -> &[RunState] {
        &self.history
    }

    pub fn transition(&mut self, next: RunState) -> ScaffoldResult<()> {
        if !self.current.can_move_to(next) {
            return Err(ScaffoldError::operational(format!(
                "Invalid pipeline transition {:?} -> {:?}",
                self.current, next
            )));
        }
        self.current = next;
        self.history.push(next);
        Ok(())
    }
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub directory: PathBuf,
    pub app_name: String,
    pub app_id: String,
    pub platforms: Vec<PlatformTarget>,
    pub files_copied: usize,
    pub docs_url: String,
    pub next_steps: Vec<String>,
}

impl Summary {
    pub fn headline(&self) -> String {
        format!("Your app is ready in {}", self.directory.display())
    }

    pub fn docs_line(&self) -> String {
        format!("Read the docs: {}", self.docs_url)
    }
}

/// Everything the stages read and write during one run
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub inputs: Inputs,
    pub config: ProjectConfig,
    pub template_dir: PathBuf,
    pub resolved: Option<ResolvedInputs>,
    pub copied_files: Vec<String>,
    pub platforms: Vec<PlatformTarget>,
    pub summary: Option<Summary>,
}

impl PipelineContext {
    pub fn new(inputs: Inputs, config: ProjectConfig, template_dir: PathBuf) -> Self {
        Self {
            inputs,
            config,
            template_dir,
            resolved: None,
            copied_files: Vec::new(),
            platforms: Vec::new(),
            summary: None,
        }
    }

    fn resolved(&self) -> ScaffoldResult<&ResolvedInputs> {
        self.resolved
            .as_ref()
            .ok_or_else(|| ScaffoldError::operational("Inputs were not resolved"))
    }
}

/// Drives the stages against a product, a toolchain, a prompter, and a reporter
pub struct Orchestrator<'a, C: ProductConfig> {
    product: &'a C,
    toolchain: &'a dyn Toolchain,
    prompter: &'a mut dyn Prompter,
    reporter: &'a dyn Reporter,
    cli_version: &'a str,
    state: StateMachine,
}

impl<'a, C: ProductConfig> Orchestrator<'a, C> {
    pub fn new(
        product: &'a C,
        toolchain: &'a dyn Toolchain,
        prompter: &'a mut dyn Prompter,
        reporter: &'a dyn Reporter,
        cli_version: &'a str,
    ) -> Self {
        Self {
            product,
            toolchain,
            prompter,
            reporter,
            cli_version,
            state: StateMachine::default(),
        }
    }

    pub fn state(&self) -> &StateMachine {
        &self.state
    }

    /// Run every stage in order; the first failure ends the run in `Failed`
    pub async fn run(&mut self, ctx: &mut PipelineContext) -> ScaffoldResult<Summary> {
        for stage in Stage::PIPELINE {
            self.state.transition(RunState::Running(stage))?;
            if let Err(err) = self.run_stage(stage, ctx).await {
                self.state.transition(RunState::Failed(stage))?;
                return Err(err);
            }
        }
        self.state.transition(RunState::Done)?;

        ctx.summary
            .clone()
            .ok_or_else(|| ScaffoldError::operational("Pipeline finished without a summary"))
    }

    async fn run_stage(&mut self, stage: Stage, ctx: &mut PipelineContext) -> ScaffoldResult<()> {
        match stage {
            Stage::Validating => self.validate(ctx),
            Stage::Resolving => self.resolve(ctx),
            Stage::Provisioning => self.provision(ctx).await,
            Stage::Materializing => self.materialize(ctx).await,
            Stage::Templating => self.instantiate_template(ctx).await,
            Stage::Bootstrapping => self.bootstrap(ctx).await,
            Stage::Reporting => self.report(ctx),
        }
    }

    /// Check whatever the caller supplied, before any prompting
    fn validate(&self, ctx: &PipelineContext) -> ScaffoldResult<()> {
        let checks = input_checks(
            ctx.inputs.directory.as_deref(),
            ctx.inputs.app_name.as_deref(),
            ctx.inputs.app_id.as_deref(),
        );
        run_checks(&ctx.config, &checks)
    }

    /// Prompt for missing inputs, then check the full resolved set
    fn resolve(&mut self, ctx: &mut PipelineContext) -> ScaffoldResult<()> {
        let resolved = resolve_inputs(&ctx.inputs, &mut *self.prompter)?;

        // Identity fields are committed later, by the materializing stage
        let mut candidate = ctx.config.clone();
        candidate.working_directory = PathBuf::from(&resolved.directory);
        candidate.app_name = Some(resolved.app_name.clone());
        candidate.app_id = Some(resolved.app_id.clone());
        run_checks(&candidate, &config_checks())?;

        ctx.config.working_directory = candidate.working_directory;
        ctx.resolved = Some(resolved);
        Ok(())
    }

    async fn provision(&self, ctx: &PipelineContext) -> ScaffoldResult<()> {
        let dir = &ctx.config.working_directory;
        StepRunner::new(self.reporter)
            .run(
                &format!("Creating directory {}", dir.display()),
                workspace::provision(dir),
            )
            .await
    }

    async fn materialize(&self, ctx: &mut PipelineContext) -> ScaffoldResult<()> {
        let resolved = ctx.resolved()?.clone();
        ctx.config.app_name = Some(resolved.app_name);
        ctx.config.app_id = Some(resolved.app_id);
        ctx.config.bundled_web_runtime = true;

        StepRunner::new(self.reporter)
            .run(
                &format!("Writing {}", CONFIG_FILE_NAME),
                get_or_create_config(&mut ctx.config),
            )
            .await?;
        Ok(())
    }

    async fn instantiate_template(&self, ctx: &mut PipelineContext) -> ScaffoldResult<()> {
        let template = Template::load(&ctx.template_dir).await?;
        if let Some(warning) = templates::check_compatibility(
            self.cli_version,
            &template.manifest.version,
            self.product.upgrade_command(),
        ) {
            self.reporter.warning(&warning);
        }

        let runner = StepRunner::new(self.reporter);
        ctx.copied_files = runner
            .run(
                &format!("Copying template {}", template.manifest.name),
                templates::copy_template(&template.root, ctx.config.root()),
            )
            .await?;
        runner
            .run(
                "Installing dependencies",
                self.toolchain
                    .install(ctx.config.root(), &template.manifest.dependencies),
            )
            .await
    }

    async fn bootstrap(&self, ctx: &mut PipelineContext) -> ScaffoldResult<()> {
        let runner = StepRunner::new(self.reporter);
        ctx.platforms = platform::bootstrap(self.toolchain, &runner, &ctx.config).await?;
        Ok(())
    }

    fn report(&self, ctx: &mut PipelineContext) -> ScaffoldResult<()> {
        let directory = ctx.config.working_directory.clone();
        ctx.summary = Some(Summary {
            next_steps: self.product.next_steps(&directory, &ctx.platforms),
            directory,
            app_name: ctx.config.app_name().to_string(),
            app_id: ctx.config.app_id().to_string(),
            platforms: ctx.platforms.clone(),
            files_copied: ctx.copied_files.len(),
            docs_url: self.product.docs_url().to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HostOs, PersistedConfig};
    use crate::error::FailureKind;
    use crate::product::tests::TestProduct;
    use crate::resolve::tests::ScriptedPrompter;
    use crate::resolve::Field;
    use crate::runtime::toolchain::tests::RecordingToolchain;
    use crate::step::tests::RecordingReporter;
    use crate::templates::MANIFEST_FILE;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    const VERSION: &str = "0.1.0";

    struct Fixture {
        tmp: TempDir,
        product: TestProduct,
        toolchain: RecordingToolchain,
        reporter: RecordingReporter,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_toolchain(RecordingToolchain::default())
        }

        fn with_toolchain(toolchain: RecordingToolchain) -> Self {
            let tmp = TempDir::new().unwrap();
            let template = tmp.path().join("template");
            std::fs::create_dir_all(template.join("www")).unwrap();
            std::fs::write(
                template.join(MANIFEST_FILE),
                "name: Blank\nversion: 0.1.0\ndependencies: [\"@capacitor/core\", \"@capacitor/cli\"]\n",
            )
            .unwrap();
            std::fs::write(template.join("package.json"), "{}").unwrap();
            std::fs::write(template.join("www/index.html"), "<html></html>").unwrap();

            Self {
                product: TestProduct {
                    template_dir: template,
                },
                tmp,
                toolchain,
                reporter: RecordingReporter::default(),
            }
        }

        fn target(&self, name: &str) -> String {
            self.tmp.path().join(name).to_string_lossy().into_owned()
        }

        fn context(&self, inputs: Inputs, host: HostOs) -> PipelineContext {
            PipelineContext::new(
                inputs,
                ProjectConfig::for_host(host),
                self.product.template_dir.clone(),
            )
        }

        async fn run(
            &self,
            ctx: &mut PipelineContext,
            prompter: &mut ScriptedPrompter,
        ) -> (ScaffoldResult<Summary>, Vec<RunState>) {
            let mut orchestrator = Orchestrator::new(
                &self.product,
                &self.toolchain,
                prompter,
                &self.reporter,
                VERSION,
            );
            let result = orchestrator.run(ctx).await;
            (result, orchestrator.state().history().to_vec())
        }
    }

    fn inputs(dir: &str, name: &str, id: &str) -> Inputs {
        Inputs::new(Some(dir.into()), Some(name.into()), Some(id.into()))
    }

    fn entries(path: &Path) -> usize {
        std::fs::read_dir(path).unwrap().count()
    }

    #[test]
    fn test_state_machine_rejects_leaving_failed() {
        let mut machine = StateMachine::default();
        machine
            .transition(RunState::Running(Stage::Validating))
            .unwrap();
        machine
            .transition(RunState::Failed(Stage::Validating))
            .unwrap();

        assert!(machine.current().is_terminal());
        assert!(machine
            .transition(RunState::Running(Stage::Resolving))
            .is_err());
        assert!(machine.transition(RunState::Done).is_err());
    }

    #[test]
    fn test_state_machine_rejects_skipping_stages() {
        let mut machine = StateMachine::default();
        assert!(machine
            .transition(RunState::Running(Stage::Provisioning))
            .is_err());
        assert!(machine.transition(RunState::Done).is_err());
        assert_eq!(machine.current(), RunState::Start);
    }

    #[tokio::test]
    async fn test_full_run_on_linux() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::Linux);
        let mut prompter = ScriptedPrompter::default();

        let (result, history) = fixture.run(&mut ctx, &mut prompter).await;
        let summary = result.unwrap();

        assert!(prompter.asked.is_empty());
        assert!(Path::new(&dir).join("www/index.html").exists());
        assert_eq!(summary.directory, PathBuf::from(&dir));
        assert!(summary.headline().contains(&dir));
        assert_eq!(summary.files_copied, 2);
        assert_eq!(summary.platforms, vec![PlatformTarget::Android]);
        assert_eq!(
            fixture.toolchain.calls(),
            vec![
                "install @capacitor/core @capacitor/cli",
                "add android",
                "sync android",
                "edit android"
            ]
        );

        let mut expected = vec![RunState::Start];
        expected.extend(Stage::PIPELINE.iter().map(|s| RunState::Running(*s)));
        expected.push(RunState::Done);
        assert_eq!(history, expected);
    }

    #[tokio::test]
    async fn test_config_file_matches_memory() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::Linux);

        let (result, _) = fixture.run(&mut ctx, &mut ScriptedPrompter::default()).await;
        result.unwrap();

        let raw = std::fs::read_to_string(Path::new(&dir).join(CONFIG_FILE_NAME)).unwrap();
        let persisted: PersistedConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.app_id, ctx.config.app_id());
        assert_eq!(persisted.app_name, ctx.config.app_name());
        assert!(persisted.bundled_web_runtime);
        assert!(ctx.config.bundled_web_runtime);
    }

    #[tokio::test]
    async fn test_macos_run_bootstraps_ios_then_android() {
        let fixture = Fixture::new();
        let dir = fixture.target("blank");
        let mut ctx = fixture.context(Inputs::new(Some(String::new()), None, None), HostOs::MacOs);
        let mut prompter = ScriptedPrompter::answering(&[(Field::Directory, dir.as_str())]);

        let (result, _) = fixture.run(&mut ctx, &mut prompter).await;
        let summary = result.unwrap();

        assert_eq!(summary.app_name, "App");
        assert_eq!(summary.app_id, "com.example.app");
        assert_eq!(
            summary.platforms,
            vec![PlatformTarget::Ios, PlatformTarget::Android]
        );
        assert_eq!(
            fixture.toolchain.calls()[1..],
            [
                "add ios",
                "sync ios",
                "add android",
                "sync android",
                "edit ios",
                "edit android"
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_directory_answer_is_a_validation_failure() {
        let fixture = Fixture::new();
        let mut ctx = fixture.context(Inputs::new(None, None, None), HostOs::MacOs);
        let mut prompter = ScriptedPrompter::default();

        let (result, history) = fixture.run(&mut ctx, &mut prompter).await;
        let err = result.unwrap_err();

        assert_eq!(err.kind, FailureKind::Validation);
        assert_eq!(err.message, "Must provide a directory");
        assert_eq!(history.last(), Some(&RunState::Failed(Stage::Resolving)));
        assert!(fixture.toolchain.calls().is_empty());
        // Only the template fixture lives in the scratch dir
        assert_eq!(entries(fixture.tmp.path()), 1);
    }

    #[tokio::test]
    async fn test_existing_directory_fails_before_any_mutation() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        std::fs::create_dir(&dir).unwrap();
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::MacOs);
        let mut prompter = ScriptedPrompter::default();

        let (result, history) = fixture.run(&mut ctx, &mut prompter).await;
        let err = result.unwrap_err();

        assert!(err.is_validation());
        assert!(err.message.contains(&dir));
        assert_eq!(history.last(), Some(&RunState::Failed(Stage::Validating)));
        assert!(prompter.asked.is_empty());
        assert_eq!(entries(Path::new(&dir)), 0);
        assert!(fixture.toolchain.calls().is_empty());
        assert!(fixture.reporter.events().is_empty());
    }

    #[tokio::test]
    async fn test_directory_created_after_validation_fails_at_provisioning() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::Linux);
        let mut prompter = ScriptedPrompter::default();
        let mut orchestrator = Orchestrator::new(
            &fixture.product,
            &fixture.toolchain,
            &mut prompter,
            &fixture.reporter,
            VERSION,
        );

        orchestrator.validate(&ctx).unwrap();
        orchestrator.resolve(&mut ctx).unwrap();
        // Someone else creates the directory before provisioning
        std::fs::create_dir(&dir).unwrap();
        let err = orchestrator.provision(&ctx).await.unwrap_err();

        assert_eq!(err.kind, FailureKind::Operational);
        assert!(err.message.contains("already exists"));
        assert_eq!(entries(Path::new(&dir)), 0);
        assert!(fixture.toolchain.calls().is_empty());
    }

    #[tokio::test]
    async fn test_rerun_into_completed_directory_fails() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");

        let mut first = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::Linux);
        fixture
            .run(&mut first, &mut ScriptedPrompter::default())
            .await
            .0
            .unwrap();

        let mut second = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::Linux);
        let (result, _) = fixture.run(&mut second, &mut ScriptedPrompter::default()).await;
        assert!(result.unwrap_err().message.contains("already exists"));
    }

    #[tokio::test]
    async fn test_invalid_supplied_id_skips_prompts() {
        let fixture = Fixture::new();
        let mut ctx = fixture.context(
            Inputs::new(None, None, Some("not-an-id".into())),
            HostOs::Linux,
        );
        let mut prompter = ScriptedPrompter::default();

        let (result, _) = fixture.run(&mut ctx, &mut prompter).await;

        assert!(result.unwrap_err().message.contains("Invalid App ID"));
        assert!(prompter.asked.is_empty());
    }

    #[tokio::test]
    async fn test_install_failure_leaves_copied_template() {
        let fixture =
            Fixture::with_toolchain(RecordingToolchain::failing_on("install @capacitor/core @capacitor/cli"));
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::MacOs);

        let (result, history) = fixture.run(&mut ctx, &mut ScriptedPrompter::default()).await;
        let err = result.unwrap_err();

        assert_eq!(err.kind, FailureKind::Operational);
        assert_eq!(history.last(), Some(&RunState::Failed(Stage::Templating)));
        assert!(Path::new(&dir).join("package.json").exists());
        assert_eq!(fixture.toolchain.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_newer_template_logs_warning() {
        let fixture = Fixture::new();
        std::fs::write(
            fixture.product.template_dir.join(MANIFEST_FILE),
            "name: Blank\nversion: 9.0.0\n",
        )
        .unwrap();
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::Linux);

        let (result, _) = fixture.run(&mut ctx, &mut ScriptedPrompter::default()).await;
        result.unwrap();

        assert!(fixture
            .reporter
            .events()
            .iter()
            .any(|e| e.starts_with("warn: ") && e.contains("9.0.0")));
    }

    #[tokio::test]
    async fn test_each_step_is_reported() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::Linux);

        fixture
            .run(&mut ctx, &mut ScriptedPrompter::default())
            .await
            .0
            .unwrap();

        let started: Vec<String> = fixture
            .reporter
            .events()
            .into_iter()
            .filter_map(|e| e.strip_prefix("start: ").map(str::to_string))
            .collect();
        assert_eq!(
            started,
            vec![
                format!("Creating directory {}", dir),
                "Writing capacitor.config.json".to_string(),
                "Copying template Blank".to_string(),
                "Installing dependencies".to_string(),
                "Adding Android platform".to_string(),
                "Syncing Android platform".to_string(),
                "Updating Android project settings".to_string(),
            ]
        );
    }

    /// Reads the persisted config the way the native CLI does when adding a platform
    #[derive(Default)]
    struct ConfigReadingToolchain {
        seen_app_ids: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Toolchain for ConfigReadingToolchain {
        async fn install(&self, _dir: &Path, _packages: &[String]) -> anyhow::Result<()> {
            Ok(())
        }

        async fn add_platform(
            &self,
            _target: PlatformTarget,
            config: &ProjectConfig,
        ) -> anyhow::Result<()> {
            let raw = tokio::fs::read_to_string(config.root().join("capacitor.config.json")).await?;
            let persisted: PersistedConfig = serde_json::from_str(&raw)?;
            self.seen_app_ids.lock().unwrap().push(persisted.app_id);
            Ok(())
        }

        async fn sync_platform(
            &self,
            _target: PlatformTarget,
            _config: &ProjectConfig,
        ) -> anyhow::Result<()> {
            Ok(())
        }

        async fn edit_project_settings(
            &self,
            _target: PlatformTarget,
            _config: &ProjectConfig,
        ) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_config_is_on_disk_when_platforms_are_added() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(inputs(&dir, "My App", "com.example.myapp"), HostOs::MacOs);
        let toolchain = ConfigReadingToolchain::default();
        let mut prompter = ScriptedPrompter::default();

        let summary = Orchestrator::new(
            &fixture.product,
            &toolchain,
            &mut prompter,
            &fixture.reporter,
            VERSION,
        )
        .run(&mut ctx)
        .await
        .unwrap();

        assert_eq!(summary.platforms.len(), 2);
        assert_eq!(
            *toolchain.seen_app_ids.lock().unwrap(),
            vec!["com.example.myapp", "com.example.myapp"]
        );
    }

    #[tokio::test]
    async fn test_prompted_directory_is_trimmed() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        let answer = format!("  {}  ", dir);
        let mut ctx = fixture.context(Inputs::default(), HostOs::Linux);
        let mut prompter = ScriptedPrompter::answering(&[(Field::Directory, answer.as_str())]);

        let (result, _) = fixture.run(&mut ctx, &mut prompter).await;
        let summary = result.unwrap();

        assert_eq!(summary.directory, PathBuf::from(&dir));
        assert!(Path::new(&dir).join(CONFIG_FILE_NAME).is_file());
    }

    #[tokio::test]
    async fn test_prompted_invalid_id_fails_while_resolving() {
        let fixture = Fixture::new();
        let dir = fixture.target("myapp");
        let mut ctx = fixture.context(Inputs::new(Some(dir.clone()), None, None), HostOs::Linux);
        let mut prompter = ScriptedPrompter::answering(&[(Field::AppId, "my-app")]);

        let (result, history) = fixture.run(&mut ctx, &mut prompter).await;
        let err = result.unwrap_err();

        assert!(err.is_validation());
        assert!(err.message.contains("my-app"));
        assert_eq!(history.last(), Some(&RunState::Failed(Stage::Resolving)));
        assert!(!Path::new(&dir).exists());
        assert!(ctx.config.app_id.is_none());
    }
}
