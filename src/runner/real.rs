//! Subprocess-backed command runner

use super::{CommandInvocation, CommandRunner};
use crate::error::DriverError;
use anyhow::{Context as _, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Wrapper binary carrying the assignments into the child process.
/// Absolute path: the child environment is cleared, so lookup through a
/// PATH variable cannot be relied on.
const ENV_WRAPPER: &str = "/usr/bin/env";

/// Runs preprocessing commands through the `env` wrapper
///
/// Each invocation spawns `env KEY=VALUE ... <command>` with the command
/// line as one final token, the invocation's working directory, and the
/// child environment replaced by `LANG=C` so command output stays
/// deterministic regardless of the host locale.
#[derive(Debug, Clone, Copy)]
pub struct EnvCommandRunner;

impl EnvCommandRunner {
    /// Create a new `EnvCommandRunner`
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for EnvCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for EnvCommandRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<()> {
        debug!(
            "Running preprocessing command in {}: {}",
            invocation.working_dir.display(),
            invocation.command_line
        );

        let output = Command::new(ENV_WRAPPER)
            .args(invocation.assignment_args())
            .arg(&invocation.command_line)
            .current_dir(&invocation.working_dir)
            .env_clear()
            .env("LANG", "C")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| {
                format!(
                    "Failed to launch preprocessing command '{}' in directory '{}'",
                    invocation.command_line,
                    invocation.working_dir.display()
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);

            let mut error_msg = format!(
                "Command failed with exit code {}: {}\n",
                output.status.code().unwrap_or(-1),
                invocation.command_line
            );

            if !stderr.trim().is_empty() {
                error_msg.push_str(&format!("Error output:\n{}\n", stderr.trim()));
            }

            if !stdout.trim().is_empty() {
                error_msg.push_str(&format!("Standard output:\n{}\n", stdout.trim()));
            }

            error_msg.push_str(&format!(
                "Working directory: {}",
                invocation.working_dir.display()
            ));

            return Err(DriverError::preprocess(error_msg).into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("Command output:\n{}", stdout.trim());
        }

        Ok(())
    }
}
