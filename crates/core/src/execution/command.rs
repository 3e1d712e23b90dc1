//! Command execution utilities
//!
//! This module provides the single place where tool adapters spawn external
//! programs, so every adapter gets the same error mapping and logging.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::task::{TaskError, TaskResult};

/// Runs external tools in a working directory, inheriting stdout/stderr so the
/// tool's own output is the detail the user sees.
pub struct CommandExecutor<'a> {
    working_dir: &'a Path,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(working_dir: &'a Path) -> Self {
        Self { working_dir }
    }

    /// Execute a command and map a non-zero exit to a task failure.
    ///
    /// A command that cannot be spawned at all is an adapter defect and
    /// surfaces as [`TaskError::Io`].
    pub fn execute_command(&self, command: &mut Command, failure_error_message: &str) -> TaskResult {
        command.current_dir(self.working_dir);
        debug!(command = ?command, "executing");

        let status = command.status()?;

        if !status.success() {
            return Err(TaskError::Failure(format!(
                "{}: {}",
                failure_error_message,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    /// Execute a program with arguments
    pub fn execute_command_with_args(&self, program: &str, args: &[String]) -> TaskResult {
        let mut command = Command::new(program);
        command.args(args);
        self.execute_command(
            &mut command,
            &format!("Command '{}' failed with exit code", program),
        )
    }
}
