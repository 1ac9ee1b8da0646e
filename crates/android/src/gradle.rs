//! Gradle build system integration
//!
//! Invokes the project's Gradle wrapper and maps build targets to task
//! lists for the two project layouts (single-module `app`, and the
//! multi-module `:app` / `:uiautomation` split).

use crate::targets::BuildTargets;
use std::path::Path;
use uiagent_core::error::Result;
use uiagent_core::process::run_command_streaming_in_dir;

/// Debug build of the main APK (single-module layout)
pub const ASSEMBLE_DEBUG: &str = "assembleDebug";
/// Debug build of the instrumentation test APK (single-module layout)
pub const ASSEMBLE_DEBUG_ANDROID_TEST: &str = "assembleDebugAndroidTest";
/// Debug build of the main APK (`:app` module)
pub const APP_ASSEMBLE_DEBUG: &str = ":app:assembleDebug";
/// Debug build of the UiAutomation target APK
pub const UIAUTOMATION_ASSEMBLE_DEBUG: &str = ":uiautomation:assembleDebug";
/// Debug build of the UiAutomation instrumentation test APK
pub const UIAUTOMATION_ASSEMBLE_DEBUG_ANDROID_TEST: &str =
    ":uiautomation:assembleDebugAndroidTest";

/// Name of the Gradle wrapper script for the current platform
pub fn wrapper() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "./gradlew"
    }
}

/// Run a Gradle task, streaming build output to the terminal
///
/// Returns the Gradle exit code. A missing wrapper surfaces as a
/// `CommandNotFound` error, distinct from a failed build.
pub fn run_task(project_dir: &Path, task: &str) -> Result<i32> {
    run_command_streaming_in_dir(wrapper(), &[task], project_dir)
}

/// Tasks for the single-module layout, in build order (main first)
pub fn single_module_tasks(targets: &BuildTargets) -> Vec<&'static str> {
    let mut tasks = Vec::new();
    if targets.main {
        tasks.push(ASSEMBLE_DEBUG);
    }
    if targets.test {
        tasks.push(ASSEMBLE_DEBUG_ANDROID_TEST);
    }
    tasks
}

/// Tasks for the multi-module layout, in build order (main first)
///
/// The test selection covers two tasks: the UiAutomation target APK and
/// its instrumentation APK.
pub fn multi_module_tasks(targets: &BuildTargets) -> Vec<&'static str> {
    let mut tasks = Vec::new();
    if targets.main {
        tasks.push(APP_ASSEMBLE_DEBUG);
    }
    if targets.test {
        tasks.push(UIAUTOMATION_ASSEMBLE_DEBUG);
        tasks.push(UIAUTOMATION_ASSEMBLE_DEBUG_ANDROID_TEST);
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradle_wrapper_name() {
        let wrapper = wrapper();
        assert!(wrapper.contains("gradlew"));
    }

    #[test]
    fn test_single_module_all_targets() {
        let targets = BuildTargets::from_flags(false, false);
        assert_eq!(
            single_module_tasks(&targets),
            vec![ASSEMBLE_DEBUG, ASSEMBLE_DEBUG_ANDROID_TEST]
        );
    }

    #[test]
    fn test_single_module_main_only() {
        let targets = BuildTargets::from_flags(true, false);
        assert_eq!(single_module_tasks(&targets), vec![ASSEMBLE_DEBUG]);
    }

    #[test]
    fn test_multi_module_test_only() {
        let targets = BuildTargets::from_flags(false, true);
        assert_eq!(
            multi_module_tasks(&targets),
            vec![
                UIAUTOMATION_ASSEMBLE_DEBUG,
                UIAUTOMATION_ASSEMBLE_DEBUG_ANDROID_TEST
            ]
        );
    }

    #[test]
    fn test_multi_module_both_flags_empty() {
        let targets = BuildTargets::from_flags(true, true);
        assert!(multi_module_tasks(&targets).is_empty());
    }

    #[test]
    fn test_run_task_missing_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_task(dir.path(), ASSEMBLE_DEBUG).unwrap_err();
        assert_eq!(err.code, uiagent_core::ErrorCode::CommandNotFound);
    }
}
