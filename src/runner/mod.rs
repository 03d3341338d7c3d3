//! Preprocessing command execution
//!
//! A `CommandInvocation` captures everything the driver decides about a
//! preprocessing subprocess; a `CommandRunner` turns it into an actual
//! process (or records it, in tests).

pub mod mock;
pub mod real;

pub use mock::MockRunner;
pub use real::EnvCommandRunner;

use anyhow::Result;
use std::path::PathBuf;

/// One preprocessing subprocess, fully described
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Environment assignments, in injection order
    pub assignments: Vec<(String, String)>,
    /// The configured command line, passed through as a single token
    pub command_line: String,
    /// Working directory for the subprocess
    pub working_dir: PathBuf,
}

impl CommandInvocation {
    /// The assignments rendered as `KEY=VALUE` arguments
    #[must_use]
    pub fn assignment_args(&self) -> Vec<String> {
        self.assignments
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }
}

/// Executes preprocessing invocations
pub trait CommandRunner {
    /// Run a single invocation to completion, blocking until it exits
    fn run(&self, invocation: &CommandInvocation) -> Result<()>;
}
