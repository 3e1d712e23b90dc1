use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::files::{find_files, yaml_globs};
use crate::task::{require_path, Task, TaskError, TaskResult};

/// Checks YAML files for syntax errors
///
/// Parsing happens in-process, one file at a time; every file is checked even
/// after an error so the user sees all broken files at once.
#[derive(Default)]
pub struct YamlLintTask {
    path: Option<PathBuf>,
}

impl YamlLintTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every document in `contents`
    fn lint(contents: &str) -> Result<(), serde_yaml::Error> {
        for document in serde_yaml::Deserializer::from_str(contents) {
            serde_yaml::Value::deserialize(document)?;
        }
        Ok(())
    }
}

impl Task for YamlLintTask {
    fn set_path(&mut self, path: &Path) -> &mut dyn Task {
        self.path = Some(path.to_path_buf());
        self
    }

    fn execute(&mut self) -> TaskResult {
        let path = require_path(&self.path)?;
        let files = find_files(path, &yaml_globs());
        if files.is_empty() {
            return Err(TaskError::NotFound("No YAML files found".to_string()));
        }

        let mut invalid = 0usize;
        for file in &files {
            let contents = std::fs::read_to_string(file)?;
            if let Err(e) = Self::lint(&contents) {
                warn!("{}: {}", file.display(), e);
                invalid += 1;
            }
        }

        if invalid == 0 {
            Ok(())
        } else {
            Err(TaskError::Failure(format!(
                "{} of {} YAML file(s) are invalid",
                invalid,
                files.len()
            )))
        }
    }

    fn status_message(&self) -> String {
        "Linting YAML files".to_string()
    }
}
