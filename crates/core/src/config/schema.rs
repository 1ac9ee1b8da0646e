//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub install: InstallConfig,
}

/// General project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Android project root containing the Gradle wrapper
    #[serde(default = "default_project_dir")]
    pub project_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
        }
    }
}

fn default_project_dir() -> String {
    ".".to_string()
}

/// APK install configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Timeout for a single adb install, in seconds
    #[serde(default = "default_install_timeout_secs")]
    pub timeout_secs: u64,

    /// Default device serial (overridden by -s/--serial)
    #[serde(default)]
    pub serial: Option<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_install_timeout_secs(),
            serial: None,
        }
    }
}

fn default_install_timeout_secs() -> u64 {
    120
}
