use std::path::{Path, PathBuf};

use tracing::warn;

use crate::configs::tools::ToolsConfig;
use crate::execution::CommandExecutor;
use crate::files::find_files;
use crate::task::{require_path, Task, TaskError, TaskResult};

/// Validates every composer.json under the path with `composer validate`
pub struct ComposerValidateTask {
    executable: String,
    path: Option<PathBuf>,
}

impl ComposerValidateTask {
    pub fn new(config: &ToolsConfig) -> Self {
        Self {
            executable: config.composer.clone(),
            path: None,
        }
    }
}

impl Task for ComposerValidateTask {
    fn set_path(&mut self, path: &Path) -> &mut dyn Task {
        self.path = Some(path.to_path_buf());
        self
    }

    fn execute(&mut self) -> TaskResult {
        let path = require_path(&self.path)?;
        let manifests = find_files(path, &["**/composer.json".to_string()]);
        if manifests.is_empty() {
            return Err(TaskError::NotFound("No composer.json files found".to_string()));
        }

        let args = vec!["validate".to_string(), "--ansi".to_string()];
        let mut invalid = Vec::new();
        for manifest in &manifests {
            let dir = manifest.parent().unwrap_or(path);
            match CommandExecutor::new(dir).execute_command_with_args(&self.executable, &args) {
                Ok(()) => {}
                Err(TaskError::Failure(reason)) => {
                    warn!(manifest = %manifest.display(), "{}", reason);
                    invalid.push(manifest.display().to_string());
                }
                Err(e) => return Err(e),
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(TaskError::Failure(format!(
                "Invalid composer.json: {}",
                invalid.join(", ")
            )))
        }
    }

    fn status_message(&self) -> String {
        "Validating composer.json files".to_string()
    }
}
