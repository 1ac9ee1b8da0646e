//! Android build and device tooling for UiAgentService
//!
//! This crate provides the building blocks for the build and install
//! command-line tools:
//! - Gradle wrapper invocation and task selection
//! - adb install and device listing
//! - Build target resolution from CLI flags
//! - Expected APK artifact tables

#![warn(missing_docs)]

pub mod adb;
pub mod artifacts;
pub mod gradle;
pub mod targets;
