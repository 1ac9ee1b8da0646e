//! Expected APK output locations
//!
//! Gradle's conventional output layout is known in advance, so the
//! install step works from a fixed, ordered table of path/label pairs
//! instead of scanning build directories.

use crate::targets::BuildTargets;
use std::path::{Path, PathBuf};

/// An APK produced by the build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApkArtifact {
    /// Output path relative to the project root
    pub path: &'static str,
    /// Human-readable label for status output
    pub label: &'static str,
}

impl ApkArtifact {
    /// Absolute location under the given project root
    pub fn resolve(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.path)
    }

    /// Whether the APK exists under the given project root
    pub fn exists_in(&self, project_dir: &Path) -> bool {
        self.resolve(project_dir).is_file()
    }
}

/// Main APK (single-module layout)
pub const APP_DEBUG: ApkArtifact = ApkArtifact {
    path: "app/build/outputs/apk/debug/app-debug.apk",
    label: "main APK",
};

/// Instrumentation test APK (single-module layout)
pub const APP_DEBUG_ANDROID_TEST: ApkArtifact = ApkArtifact {
    path: "app/build/outputs/apk/androidTest/debug/app-debug-androidTest.apk",
    label: "test APK (instrumentation)",
};

/// Main APK, the accessibility service (`:app` module)
pub const APP_MODULE_DEBUG: ApkArtifact = ApkArtifact {
    path: "app/build/outputs/apk/debug/app-debug.apk",
    label: "main APK (accessibility service)",
};

/// UiAutomation target APK (`:uiautomation` module)
pub const UIAUTOMATION_DEBUG: ApkArtifact = ApkArtifact {
    path: "uiautomation/build/outputs/apk/debug/uiautomation-debug.apk",
    label: "UiAutomation target APK",
};

/// UiAutomation instrumentation test APK
pub const UIAUTOMATION_DEBUG_ANDROID_TEST: ApkArtifact = ApkArtifact {
    path: "uiautomation/build/outputs/apk/androidTest/debug/uiautomation-debug-androidTest.apk",
    label: "instrumentation test APK",
};

/// Artifacts of the single-module layout, in report order
pub fn single_module_artifacts(targets: &BuildTargets) -> Vec<ApkArtifact> {
    let mut artifacts = Vec::new();
    if targets.main {
        artifacts.push(APP_DEBUG);
    }
    if targets.test {
        artifacts.push(APP_DEBUG_ANDROID_TEST);
    }
    artifacts
}

/// Artifacts of the multi-module layout, in install order
///
/// Main APK first, then the UiAutomation target APK, then its
/// instrumentation APK.
pub fn multi_module_artifacts(targets: &BuildTargets) -> Vec<ApkArtifact> {
    let mut artifacts = Vec::new();
    if targets.main {
        artifacts.push(APP_MODULE_DEBUG);
    }
    if targets.test {
        artifacts.push(UIAUTOMATION_DEBUG);
        artifacts.push(UIAUTOMATION_DEBUG_ANDROID_TEST);
    }
    artifacts
}
