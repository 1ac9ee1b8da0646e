//! UiAgentService APK builder and installer
//!
//! Compiles the main APK (accessibility service) and the UiAutomation
//! APK pair via the project's Gradle wrapper, then pushes the resulting
//! APKs to a connected device with `adb install -r`.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use uiagent_android::adb::Adb;
use uiagent_android::artifacts::ApkArtifact;
use uiagent_android::targets::BuildTargets;
use uiagent_android::{artifacts, gradle};
use uiagent_cli::output::{format_duration, Status};
use uiagent_core::config::Config;
use uiagent_core::error::exit_codes;
use uiagent_core::ErrorCode;

#[derive(Parser)]
#[command(name = "uiagent-build-install")]
#[command(about = "Build the UiAgentService APKs and install them on a device")]
#[command(version)]
struct Cli {
    /// Only build the main APK
    #[arg(long)]
    main_only: bool,

    /// Only build the UiAutomation APK pair
    #[arg(long)]
    test_only: bool,

    /// Build only, skip the install step
    #[arg(long)]
    no_install: bool,

    /// Device serial to install on
    #[arg(short, long)]
    serial: Option<String>,

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

    let serial = cli.serial.or_else(|| config.schema.install.serial.clone());
    let adb = Adb::new(serial)
        .with_install_timeout(Duration::from_secs(config.schema.install.timeout_secs));

    std::process::exit(run(&project_dir, &targets, cli.no_install, &adb));
}

fn run(project_dir: &Path, targets: &BuildTargets, no_install: bool, adb: &Adb) -> i32 {
    let code = run_build(project_dir, targets);
    if code != exit_codes::SUCCESS {
        return code;
    }

    let apks = artifacts::multi_module_artifacts(targets);
    if no_install || apks.is_empty() {
        return exit_codes::SUCCESS;
    }

    run_install(project_dir, &apks, adb)
}

fn run_build(project_dir: &Path, targets: &BuildTargets) -> i32 {
    Status::header("Building UiAgentService");

    let tasks = gradle::multi_module_tasks(targets);
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
    for artifact in artifacts::multi_module_artifacts(targets) {
        println!("  {}: {}", artifact.label, artifact.path);
    }

    exit_codes::SUCCESS
}

fn run_install(project_dir: &Path, apks: &[ApkArtifact], adb: &Adb) -> i32 {
    Status::header("Installing APKs");

    for artifact in apks {
        if !artifact.exists_in(project_dir) {
            Status::warning(&format!(
                "{} not found at {}, skipping install",
                artifact.label, artifact.path
            ));
            continue;
        }

        Status::info(&format!("Installing {}...", artifact.label));
        match adb.install(&artifact.resolve(project_dir)) {
            Ok(()) => Status::success(&format!("{} installed", artifact.label)),
            Err(e) => {
                Status::error(&format!("Failed to install {}: {}", artifact.label, e));
                return exit_codes::FAILURE;
            }
        }
    }

    Status::success("All APKs installed");
    exit_codes::SUCCESS
}
