//! create-app CLI - scaffolds a cross-platform app workspace

use app_scaffolder::tui::CreateArgs;
use app_scaffolder::{PlatformTarget, ProductConfig, ScaffoldError};
use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Template shipped with the binary, relative to the executable or the source tree
const BUNDLED_TEMPLATE: &str = "templates/app";

/// create-app product configuration
#[derive(Clone)]
pub struct CreateAppConfig;

impl ProductConfig for CreateAppConfig {
    fn name(&self) -> &'static str {
        "create-app"
    }

    fn display_name(&self) -> &'static str {
        "Create App"
    }

    fn default_template_dir(&self) -> PathBuf {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(BUNDLED_TEMPLATE)))
            .filter(|dir| dir.is_dir());

        beside_exe.unwrap_or_else(|| {
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("../..")
                .join(BUNDLED_TEMPLATE)
        })
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_APP_TEMPLATE_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://capacitorjs.com/docs"
    }

    fn next_steps(&self, dir: &Path, platforms: &[PlatformTarget]) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Edit the web app
        steps.push("Edit www/index.html, then run: npx cap sync".to_string());

        // Step 3: Open each native IDE
        for platform in platforms {
            steps.push(format!("npx cap open {}", platform.cli_name()));
        }

        steps
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding cross-platform app workspaces"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-app --force"
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Directory to create the app in
    pub dir: Option<String>,

    /// App display name
    pub name: Option<String>,

    /// App package id in reverse-domain form (ex: com.example.app)
    pub id: Option<String>,

    /// Local directory to use as the starter template (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Never prompt; missing name and id take their defaults
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.dir,
            app_name: args.name,
            app_id: args.id,
            template_dir: args.template_dir,
            yes: args.yes,
        }
    }
}

/// Command definition named and described by the product
fn cli_command<C: ProductConfig>(product: &C) -> clap::Command {
    Args::command()
        .name(product.name())
        .about(product.cli_description())
}

/// Fatal output: usage for validation failures only, then the error line
fn failure_report<C: ProductConfig>(product: &C, err: &ScaffoldError) -> String {
    let mut report = String::new();
    if err.is_validation() {
        report.push_str(&cli_command(product).render_usage().to_string());
        report.push_str("\n\n");
    }
    report.push_str(&format!("{} {}", "Error:".red().bold(), err));
    report
}

/// Print the fatal failure and exit non-zero
fn fail<C: ProductConfig>(product: &C, err: &ScaffoldError) -> ! {
    let _ = console::Term::stderr().show_cursor();
    eprintln!("{}", failure_report(product, err));
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = CreateAppConfig;
    let args = Args::from_arg_matches(&cli_command(&config).get_matches())
        .unwrap_or_else(|err| err.exit());

    let result = app_scaffolder::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        fail(&config, &err);
    }
}
