use std::path::{Path, PathBuf};

use crate::configs::tools::ToolsConfig;
use crate::execution::CommandExecutor;
use crate::files::{find_files, php_globs, working_dir, PHP_EXTENSIONS};
use crate::task::{require_path, Task, TaskError, TaskResult};

/// Checks PHP files for syntax errors with PHP Parallel Lint
pub struct PhpLintTask {
    executable: String,
    path: Option<PathBuf>,
}

impl PhpLintTask {
    pub fn new(config: &ToolsConfig) -> Self {
        Self {
            executable: config.phplint.clone(),
            path: None,
        }
    }

    fn args(path: &Path) -> Vec<String> {
        vec![
            "-e".to_string(),
            PHP_EXTENSIONS.join(","),
            "--exclude".to_string(),
            "vendor".to_string(),
            "--colors".to_string(),
            path.display().to_string(),
        ]
    }
}

impl Task for PhpLintTask {
    fn set_path(&mut self, path: &Path) -> &mut dyn Task {
        self.path = Some(path.to_path_buf());
        self
    }

    fn execute(&mut self) -> TaskResult {
        let path = require_path(&self.path)?;
        if find_files(path, &php_globs()).is_empty() {
            return Err(TaskError::NotFound("No PHP files found".to_string()));
        }

        CommandExecutor::new(working_dir(path))
            .execute_command_with_args(&self.executable, &Self::args(path))
    }

    fn status_message(&self) -> String {
        "Linting PHP files".to_string()
    }
}
