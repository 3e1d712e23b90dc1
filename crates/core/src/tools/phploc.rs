use std::path::{Path, PathBuf};

use crate::configs::tools::{ReportsDir, ToolsConfig};
use crate::execution::CommandExecutor;
use crate::files::{find_files, php_globs, working_dir, PHP_EXTENSIONS};
use crate::task::{require_path, Task, TaskError, TaskResult};

/// Measures the size of the codebase with phploc and writes a JSON report
/// for [`CoverageTask`](super::CoverageTask)
pub struct PhplocTask {
    executable: String,
    report_path: PathBuf,
    path: Option<PathBuf>,
}

impl PhplocTask {
    pub fn new(config: &ToolsConfig, reports: &ReportsDir) -> Self {
        Self {
            executable: config.phploc.clone(),
            report_path: reports.phploc_report_path(),
            path: None,
        }
    }

    fn args(&self, path: &Path) -> Vec<String> {
        let mut args: Vec<String> = PHP_EXTENSIONS
            .iter()
            .map(|extension| format!("--suffix=.{}", extension))
            .collect();
        args.push("--exclude=vendor".to_string());
        args.push(format!("--log-json={}", self.report_path.display()));
        args.push(path.display().to_string());
        args
    }

    /// Remove a report left behind by an earlier run so it is never mistaken
    /// for this run's output
    fn clear_report(&self) -> Result<(), TaskError> {
        if let Some(dir) = self.report_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        if self.report_path.exists() {
            std::fs::remove_file(&self.report_path)?;
        }
        Ok(())
    }
}

impl Task for PhplocTask {
    fn set_path(&mut self, path: &Path) -> &mut dyn Task {
        self.path = Some(path.to_path_buf());
        self
    }

    fn execute(&mut self) -> TaskResult {
        let path = require_path(&self.path)?;
        self.clear_report()?;
        if find_files(path, &php_globs()).is_empty() {
            return Err(TaskError::NotFound("No PHP files found".to_string()));
        }

        CommandExecutor::new(working_dir(path))
            .execute_command_with_args(&self.executable, &self.args(path))
    }

    fn status_message(&self) -> String {
        "Measuring the size of the codebase".to_string()
    }
}
