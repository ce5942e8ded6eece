//! Command execution primitives with consistent error handling.
//!
//! Tasks never touch `std::process` directly; they go through a
//! [`CommandRunner`] so the task sequencing can be exercised against a fake.

use std::path::Path;
use std::process::Command;

use serde::Serialize;

use crate::{Error, Result};

/// Captured output from one external command invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// External process collaborator.
///
/// `run` captures output and reports the exit status in the returned
/// [`CommandOutput`]; it only errors when the process cannot be started.
/// `run_interactive` inherits stdio and blocks until the process exits.
pub trait CommandRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput>;

    fn run_interactive(&self, dir: &Path, program: &str, args: &[&str]) -> Result<i32>;
}

/// Runner backed by real local processes.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| Error::other(format!("Failed to run {}: {}", program, e)))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    fn run_interactive(&self, dir: &Path, program: &str, args: &[&str]) -> Result<i32> {
        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .status()
            .map_err(|e| Error::other(format!("Failed to run {}: {}", program, e)))?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Extract error text from command output.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
pub fn error_text(output: &CommandOutput) -> String {
    if !output.stderr.trim().is_empty() {
        output.stderr.trim().to_string()
    } else {
        output.stdout.trim().to_string()
    }
}
