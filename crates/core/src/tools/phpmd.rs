use std::path::{Path, PathBuf};

use crate::configs::tools::ToolsConfig;
use crate::execution::CommandExecutor;
use crate::files::{find_files, php_globs, working_dir, PHP_EXTENSIONS};
use crate::task::{require_path, Task, TaskError, TaskResult};

/// Looks for code smells with PHP Mess Detector
pub struct PhpmdTask {
    executable: String,
    rulesets: String,
    path: Option<PathBuf>,
}

impl PhpmdTask {
    pub fn new(config: &ToolsConfig) -> Self {
        Self {
            executable: config.phpmd.clone(),
            rulesets: config.phpmd_rulesets.clone(),
            path: None,
        }
    }

    fn args(&self, path: &Path) -> Vec<String> {
        vec![
            path.display().to_string(),
            "text".to_string(),
            self.rulesets.clone(),
            "--suffixes".to_string(),
            PHP_EXTENSIONS.join(","),
            "--exclude".to_string(),
            "*/vendor/*,*/node_modules/*".to_string(),
        ]
    }
}

impl Task for PhpmdTask {
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
            .execute_command_with_args(&self.executable, &self.args(path))
    }

    fn status_message(&self) -> String {
        "Running PHP Mess Detector".to_string()
    }
}
