//! Sequential task runner
//!
//! Runs an ordered list of tasks against one path and reduces their outcomes to
//! a single [`StatusCode`]. Failures are collected, never short-circuited, so a
//! single run reports every failing check.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::task::{Task, TaskError};
use crate::types::{OrcaError, OrcaResult};

/// Reduced outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    Error,
}

impl StatusCode {
    /// Process exit code for this status
    pub fn exit_code(self) -> u8 {
        match self {
            StatusCode::Ok => 0,
            StatusCode::Error => 1,
        }
    }
}

/// Owns the shared path and the ordered task list for one run
#[derive(Default)]
pub struct TaskRunner {
    path: Option<PathBuf>,
    tasks: Vec<Box<dyn Task>>,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path every task will be bound to at run time
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    /// Append a task; insertion order is execution order
    pub fn add_task(&mut self, task: Box<dyn Task>) -> &mut Self {
        self.tasks.push(task);
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Status messages of the queued tasks, in execution order
    pub fn status_messages(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.status_message()).collect()
    }

    /// Execute every task in order and reduce the outcomes
    pub fn run(&mut self) -> OrcaResult<StatusCode> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| OrcaError::Runner("No path set for task runner".to_string()))?;

        let mut failures = 0usize;
        for task in &mut self.tasks {
            let message = task.status_message();
            info!("{}", message);

            match task.set_path(&path).execute() {
                Ok(()) => debug!(task = %message, "task passed"),
                Err(TaskError::NotFound(reason)) => {
                    info!(task = %message, "skipped: {}", reason);
                }
                Err(TaskError::Failure(reason)) => {
                    warn!(task = %message, "failed: {}", reason);
                    failures += 1;
                }
                Err(source) => {
                    return Err(OrcaError::Task {
                        task: message,
                        source,
                    });
                }
            }
        }

        if failures > 0 {
            warn!("{} of {} task(s) failed", failures, self.tasks.len());
            Ok(StatusCode::Error)
        } else {
            Ok(StatusCode::Ok)
        }
    }
}
