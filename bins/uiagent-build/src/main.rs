//! UiAgentService APK builder
//!
//! Compiles the main APK and/or the instrumentation test APK by invoking
//! the project's Gradle wrapper.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use uiagent_android::targets::BuildTargets;
use uiagent_android::{artifacts, gradle};
use uiagent_cli::output::{format_duration, Status};
use uiagent_core::config::Config;
use uiagent_core::error::exit_codes;
use uiagent_core::ErrorCode;

#[derive(Parser)]
#[command(name = "uiagent-build")]
#[command(about = "Build the UiAgentService main and instrumentation test APKs")]
#[command(version)]
struct Cli {
    /// Only build the main APK
    #[arg(long)]
    main_only: bool,

    /// Only build the instrumentation test APK
    #[arg(long)]
    test_only: bool,

    /// Android project root (defaults to the configured project_dir)
    #[arg(long)]
    project_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = Config::load(cli.config.as_deref().and_then(|p| p.to_str()))?;
    let project_dir = cli
        .project_dir
        .unwrap_or_else(|| PathBuf::from(&config.schema.general.project_dir));
    let targets = BuildTargets::from_flags(cli.main_only, cli.test_only);

    std::process::exit(run_build(&project_dir, &targets));
}

fn run_build(project_dir: &Path, targets: &BuildTargets) -> i32 {
    Status::header("Building UiAgentService");

    let tasks = gradle::single_module_tasks(targets);
    if tasks.is_empty() {
        Status::info("Nothing selected: --main-only and --test-only exclude each other's target");
        return exit_codes::SUCCESS;
    }

    let started = Instant::now();
    for task in &tasks {
        Status::info(&format!("Running {}...", task));
        match gradle::run_task(project_dir, task) {
            Ok(0) => {}
            Ok(code) => {
                Status::error(&format!("Build failed: Gradle exited with code {}", code));
                return exit_codes::FAILURE;
            }
            Err(e) if e.code == ErrorCode::CommandNotFound => {
                Status::error(
                    "gradlew script not found. Run from the UiAgentService project root \
                     or pass --project-dir.",
                );
                return exit_codes::FAILURE;
            }
            Err(e) => {
                Status::error(&format!("Build error: {}", e));
                return exit_codes::FAILURE;
            }
        }
    }

    Status::success(&format!(
        "Build succeeded in {}",
        format_duration(started.elapsed())
    ));
    for artifact in artifacts::single_module_artifacts(targets) {
        println!("  {}: {}", artifact.label, artifact.path);
    }

    exit_codes::SUCCESS
}
