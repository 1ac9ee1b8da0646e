//! adb integration
//!
//! Wraps the device-bridge tool for installing APKs onto a connected
//! device or emulator.

use std::path::Path;
use std::time::Duration;
use uiagent_core::error::{Error, Result};
use uiagent_core::process::{command_exists, run_command, run_command_with_timeout};

/// Default timeout for a single `adb install`
pub const DEFAULT_INSTALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Handle to the adb command-line tool
///
/// Carries the optional device serial and the install timeout so call
/// sites don't rebuild the selector arguments for every invocation.
#[derive(Debug, Clone)]
pub struct Adb {
    serial: Option<String>,
    install_timeout: Duration,
}

impl Adb {
    /// Create a handle, optionally pinned to a device serial
    pub fn new(serial: Option<String>) -> Self {
        Self {
            serial,
            install_timeout: DEFAULT_INSTALL_TIMEOUT,
        }
    }

    /// Override the install timeout
    pub fn with_install_timeout(mut self, timeout: Duration) -> Self {
        self.install_timeout = timeout;
        self
    }

    /// Install an APK, replacing any existing installation
    ///
    /// Runs `adb [-s SERIAL] install -r <path>` under the install timeout.
    /// A non-zero adb exit is an `AdbError`; a timeout propagates as
    /// `ProcessTimeout`. Both are fatal to the caller.
    pub fn install(&self, apk_path: &Path) -> Result<()> {
        let args = self.install_args(apk_path);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let result = run_command_with_timeout("adb", &arg_refs, self.install_timeout)?;
        if result.success {
            Ok(())
        } else {
            Err(Error::adb(format!(
                "adb install exited with code {}: {}",
                result.exit_code,
                result.combined_output().trim()
            )))
        }
    }

    fn install_args(&self, apk_path: &Path) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(serial) = &self.serial {
            args.push("-s".to_string());
            args.push(serial.clone());
        }
        args.push("install".to_string());
        args.push("-r".to_string());
        args.push(apk_path.display().to_string());
        args
    }
}

/// Check if adb is available
pub fn is_available() -> bool {
    command_exists("adb")
}

/// List serials of connected devices in the `device` state
pub fn devices() -> Result<Vec<String>> {
    let result = run_command("adb", &["devices"])?;
    Ok(result
        .stdout
        .lines()
        .skip(1) // Skip header
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            match (cols.next(), cols.next()) {
                (Some(serial), Some("device")) => Some(serial.to_string()),
                _ => None,
            }
        })
        .collect())
}
