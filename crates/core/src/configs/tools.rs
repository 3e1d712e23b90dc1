use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use crate::types::{OrcaError, OrcaResult};

/// Executables and output locations for the tool adapters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ToolsConfig {
    pub composer: String,
    pub phplint: String,
    pub phpcs: String,
    pub phpmd: String,
    pub phploc: String,
    pub phpmd_rulesets: String,
    /// Directory reports are written to; phploc writes here and coverage reads it back.
    /// When unset every run gets its own scratch directory.
    pub reports_dir: Option<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            composer: "composer".to_string(),
            phplint: "parallel-lint".to_string(),
            phpcs: "phpcs".to_string(),
            phpmd: "phpmd".to_string(),
            phploc: "phploc".to_string(),
            phpmd_rulesets: "cleancode,codesize,design,unusedcode".to_string(),
            reports_dir: None,
        }
    }
}

/// Reports directory for a single run
///
/// A scratch directory is private to the run and removed when this is dropped,
/// so it must outlive the task runner.
#[derive(Debug)]
pub enum ReportsDir {
    Configured(PathBuf),
    Scratch(TempDir),
}

impl ReportsDir {
    pub fn for_config(config: &ToolsConfig) -> OrcaResult<Self> {
        match &config.reports_dir {
            Some(dir) => Ok(ReportsDir::Configured(dir.clone())),
            None => Ok(ReportsDir::Scratch(
                tempfile::Builder::new().prefix("orca-reports-").tempdir()?,
            )),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ReportsDir::Configured(dir) => dir,
            ReportsDir::Scratch(dir) => dir.path(),
        }
    }

    pub fn phploc_report_path(&self) -> PathBuf {
        self.path().join("phploc.json")
    }
}

pub fn parse_tools_config(yaml_str: &str) -> OrcaResult<ToolsConfig> {
    let config: ToolsConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

pub fn load_tools_config(path: &Path) -> OrcaResult<ToolsConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        OrcaError::Config(format!(
            "Failed to read tools config {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_tools_config(&content).map_err(|e| {
        OrcaError::Config(format!(
            "Failed to parse tools config {}: {}",
            path.display(),
            e
        ))
    })
}
