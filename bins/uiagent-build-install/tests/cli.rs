//! End-to-end tests for the uiagent-build-install binary
//!
//! Stub gradlew and adb scripts stand in for the real tools so the whole
//! build-then-install flow can be exercised without an Android toolchain
//! or a connected device.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

#[cfg(unix)]
fn write_stub(path: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, script).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Stub gradlew that appends its first argument to tasks.log
#[cfg(unix)]
fn write_stub_gradlew(dir: &Path, exit_code: i32) {
    write_stub(
        &dir.join("gradlew"),
        &format!("#!/bin/sh\necho \"$1\" >> tasks.log\nexit {}\n", exit_code),
    );
}

/// Stub adb on its own PATH entry, appending its arguments to adb.log in
/// the invoking directory
#[cfg(unix)]
fn write_stub_adb(dir: &Path, exit_code: i32) -> std::path::PathBuf {
    let bin_dir = dir.join("stub-bin");
    std::fs::create_dir_all(&bin_dir).unwrap();
    write_stub(
        &bin_dir.join("adb"),
        &format!("#!/bin/sh\necho \"$@\" >> adb.log\nexit {}\n", exit_code),
    );
    bin_dir
}

#[cfg(unix)]
fn stub_path(bin_dir: &Path) -> String {
    format!(
        "{}:{}",
        bin_dir.display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

#[cfg(unix)]
fn read_log(dir: &Path, name: &str) -> Vec<String> {
    std::fs::read_to_string(dir.join(name))
        .unwrap_or_default()
        .lines()
        .map(String::from)
        .collect()
}

/// Create an empty APK file at an artifact's expected location
#[cfg(unix)]
fn touch_apk(dir: &Path, relative: &str) {
    let path = dir.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"apk").unwrap();
}

#[test]
fn missing_gradlew_fails_with_distinct_message() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("uiagent-build-install")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("gradlew script not found"));
}

#[test]
fn both_only_flags_build_nothing() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("uiagent-build-install")
        .unwrap()
        .current_dir(dir.path())
        .args(["--main-only", "--test-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing selected"));
}

#[cfg(unix)]
#[test]
fn test_only_no_install_runs_uiautomation_tasks_only() {
    let dir = tempfile::tempdir().unwrap();
    write_stub_gradlew(dir.path(), 0);

    Command::cargo_bin("uiagent-build-install")
        .unwrap()
        .current_dir(dir.path())
        .args(["--test-only", "--no-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing").not());

    assert_eq!(
        read_log(dir.path(), "tasks.log"),
        vec![
            ":uiautomation:assembleDebug",
            ":uiautomation:assembleDebugAndroidTest"
        ]
    );
}

#[cfg(unix)]
#[test]
fn build_failure_skips_install_and_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    write_stub_gradlew(dir.path(), 3);
    let bin_dir = write_stub_adb(dir.path(), 0);

    Command::cargo_bin("uiagent-build-install")
        .unwrap()
        .current_dir(dir.path())
        .env("PATH", stub_path(&bin_dir))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exited with code 3"));

    // Only the first task ran, and adb was never invoked.
    assert_eq!(read_log(dir.path(), "tasks.log"), vec![":app:assembleDebug"]);
    assert!(read_log(dir.path(), "adb.log").is_empty());
}

#[cfg(unix)]
#[test]
fn missing_apks_are_skipped_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    write_stub_gradlew(dir.path(), 0);
    let bin_dir = write_stub_adb(dir.path(), 0);

    // Only the main APK is present; the UiAutomation pair is missing.
    touch_apk(dir.path(), "app/build/outputs/apk/debug/app-debug.apk");

    Command::cargo_bin("uiagent-build-install")
        .unwrap()
        .current_dir(dir.path())
        .env("PATH", stub_path(&bin_dir))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping install"));

    let installs = read_log(dir.path(), "adb.log");
    assert_eq!(installs.len(), 1);
    assert!(installs[0].contains("install -r"));
    assert!(installs[0].contains("app-debug.apk"));
}

#[cfg(unix)]
#[test]
fn install_failure_halts_remaining_installs() {
    let dir = tempfile::tempdir().unwrap();
    write_stub_gradlew(dir.path(), 0);
    let bin_dir = write_stub_adb(dir.path(), 9);

    touch_apk(dir.path(), "app/build/outputs/apk/debug/app-debug.apk");
    touch_apk(dir.path(), "uiautomation/build/outputs/apk/debug/uiautomation-debug.apk");
    touch_apk(
        dir.path(),
        "uiautomation/build/outputs/apk/androidTest/debug/uiautomation-debug-androidTest.apk",
    );

    Command::cargo_bin("uiagent-build-install")
        .unwrap()
        .current_dir(dir.path())
        .env("PATH", stub_path(&bin_dir))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to install"));

    // The first failing install stops the loop.
    assert_eq!(read_log(dir.path(), "adb.log").len(), 1);
}

#[cfg(unix)]
#[test]
fn serial_flag_is_passed_to_adb() {
    let dir = tempfile::tempdir().unwrap();
    write_stub_gradlew(dir.path(), 0);
    let bin_dir = write_stub_adb(dir.path(), 0);

    touch_apk(dir.path(), "app/build/outputs/apk/debug/app-debug.apk");

    Command::cargo_bin("uiagent-build-install")
        .unwrap()
        .current_dir(dir.path())
        .env("PATH", stub_path(&bin_dir))
        .args(["--main-only", "-s", "emulator-5554"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All APKs installed"));

    let installs = read_log(dir.path(), "adb.log");
    assert_eq!(installs.len(), 1);
    assert!(installs[0].starts_with("-s emulator-5554 install -r"));
}
