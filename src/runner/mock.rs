//! Mock runner implementation for testing

use super::{CommandInvocation, CommandRunner};
use crate::error::DriverError;
use anyhow::Result;
use std::sync::Mutex;

/// Recording runner for tests
///
/// Records every invocation in call order. Optionally scripted to fail at
/// a given call number; the failing invocation is still recorded, matching
/// a real command that launched and then exited non-zero.
pub struct MockRunner {
    invocations: Mutex<Vec<CommandInvocation>>,
    fail_at: Option<usize>,
}

impl MockRunner {
    /// Create a runner where every invocation succeeds
    #[must_use]
    pub fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            fail_at: None,
        }
    }

    /// Create a runner failing at the given 1-based call number
    #[must_use]
    pub fn failing_at(call: usize) -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            fail_at: Some(call),
        }
    }

    /// The invocations recorded so far, in call order
    #[must_use]
    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.lock().expect("mock state poisoned").clone()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<()> {
        let call_number = {
            let mut invocations = self.invocations.lock().expect("mock state poisoned");
            invocations.push(invocation.clone());
            invocations.len()
        };

        if self.fail_at == Some(call_number) {
            return Err(DriverError::preprocess(format!(
                "Command failed: {}",
                invocation.command_line
            ))
            .into());
        }

        Ok(())
    }
}
