use std::path::{Path, PathBuf};

use crate::configs::tools::ToolsConfig;
use crate::execution::CommandExecutor;
use crate::files::{find_files, php_globs, working_dir, PHP_EXTENSIONS};
use crate::options::PhpcsStandard;
use crate::task::{require_path, StandardTask, Task, TaskError, TaskResult};

/// Checks coding standards with PHP_CodeSniffer
pub struct PhpcsTask {
    executable: String,
    standard: PhpcsStandard,
    path: Option<PathBuf>,
}

impl PhpcsTask {
    pub fn new(config: &ToolsConfig) -> Self {
        Self {
            executable: config.phpcs.clone(),
            standard: PhpcsStandard::default(),
            path: None,
        }
    }

    pub fn standard(&self) -> PhpcsStandard {
        self.standard
    }

    fn args(&self, path: &Path) -> Vec<String> {
        vec![
            "-s".to_string(),
            format!("--standard={}", self.standard),
            format!("--extensions={}", PHP_EXTENSIONS.join(",")),
            "--ignore=*/vendor/*,*/node_modules/*".to_string(),
            path.display().to_string(),
        ]
    }
}

impl Task for PhpcsTask {
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
        "Running PHP Code Sniffer".to_string()
    }
}

impl StandardTask for PhpcsTask {
    fn set_standard(&mut self, standard: PhpcsStandard) {
        self.standard = standard;
    }

    fn into_task(self: Box<Self>) -> Box<dyn Task> {
        self
    }
}
