//! Core utilities for UiAgentService build tooling
//!
//! This crate provides shared functionality used by the build and install
//! command-line tools:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Process execution**: safe command execution, streaming output, deadlines
//! - **Configuration**: TOML-based configuration with defaults

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod process;

pub use error::{Error, ErrorCode, Result, ResultExt};
