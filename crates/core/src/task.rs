//! The task contract
//!
//! A task is one external quality check bound to a filesystem path. Every tool
//! adapter in [`crate::tools`] implements [`Task`] on its own; the runner only
//! ever sees the trait.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::options::PhpcsStandard;

/// Outcome of a task that did not succeed.
///
/// Only [`TaskError::Failure`] and [`TaskError::NotFound`] are expected outcomes.
/// Every other variant signals a defect in the adapter and stops the run.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The underlying tool reported a problem with the code under test.
    #[error("{0}")]
    Failure(String),

    /// There was nothing for the task to check.
    #[error("Nothing to check: {0}")]
    NotFound(String),

    #[error("No path set for task")]
    PathNotSet,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid report {path}: {message}")]
    Report { path: PathBuf, message: String },
}

impl TaskError {
    /// Whether this error is an expected QA outcome rather than a defect.
    pub fn is_expected(&self) -> bool {
        matches!(self, TaskError::Failure(_) | TaskError::NotFound(_))
    }
}

pub type TaskResult = Result<(), TaskError>;

/// A single quality check.
pub trait Task {
    /// Bind the path the task operates on. Later calls overwrite earlier ones.
    fn set_path(&mut self, path: &Path) -> &mut dyn Task;

    /// Run the check against the bound path.
    fn execute(&mut self) -> TaskResult;

    /// Present-tense description of the work, e.g. "Linting PHP files".
    fn status_message(&self) -> String;
}

/// A task that checks code against a configurable coding standard.
pub trait StandardTask: Task {
    fn set_standard(&mut self, standard: PhpcsStandard);

    fn into_task(self: Box<Self>) -> Box<dyn Task>;
}

/// Returns the bound path or the defect error for an unbound task.
pub(crate) fn require_path(path: &Option<PathBuf>) -> Result<&Path, TaskError> {
    path.as_deref().ok_or(TaskError::PathNotSet)
}
