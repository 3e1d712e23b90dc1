use thiserror::Error;

use crate::task::TaskError;

/// The main error type for ORCA operations
#[derive(Debug, Error)]
pub enum OrcaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A task failed in a way that is not a QA finding, i.e. a defect in the adapter.
    #[error("Task '{task}' failed unexpectedly: {source}")]
    Task {
        task: String,
        #[source]
        source: TaskError,
    },

    #[error("Runner error: {0}")]
    Runner(String),
}

/// Result type alias for ORCA operations
pub type OrcaResult<T> = Result<T, OrcaError>;
