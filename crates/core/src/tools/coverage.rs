use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::configs::tools::ReportsDir;
use crate::files::find_files;
use crate::task::{require_path, Task, TaskError, TaskResult};

/// The subset of the phploc JSON report the estimate needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhplocReport {
    public_methods: u64,
    #[serde(default)]
    test_classes: u64,
    #[serde(default)]
    test_methods: u64,
}

/// Estimated test coverage: `@covers` annotations over public methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageEstimate {
    pub public_methods: u64,
    pub covers_annotations: u64,
    pub test_classes: u64,
    pub test_methods: u64,
}

impl CoverageEstimate {
    pub fn percent(&self) -> f64 {
        if self.public_methods == 0 {
            return 0.0;
        }
        let covered = self.covers_annotations.min(self.public_methods);
        covered as f64 / self.public_methods as f64 * 100.0
    }

    /// Summary table rows, one per line
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Public methods:        {:>8}", self.public_methods),
            format!("Test classes:          {:>8}", self.test_classes),
            format!("Test methods:          {:>8}", self.test_methods),
            format!("@covers annotations:   {:>8}", self.covers_annotations),
            format!("Estimated coverage:    {:>7.2}%", self.percent()),
        ]
    }
}

/// Estimates test coverage from the phploc report and the test sources.
///
/// Relies on [`PhplocTask`](super::PhplocTask) having run first in the same run.
pub struct CoverageTask {
    report_path: PathBuf,
    path: Option<PathBuf>,
}

impl CoverageTask {
    pub fn new(reports: &ReportsDir) -> Self {
        Self {
            report_path: reports.phploc_report_path(),
            path: None,
        }
    }

    fn read_report(&self) -> Result<PhplocReport, TaskError> {
        let content = std::fs::read_to_string(&self.report_path)?;
        serde_json::from_str(&content).map_err(|e| TaskError::Report {
            path: self.report_path.clone(),
            message: e.to_string(),
        })
    }

    fn count_covers_annotations(path: &Path) -> Result<u64, TaskError> {
        let mut count = 0u64;
        for file in find_files(path, &["**/*Test.php".to_string()]) {
            let contents = std::fs::read_to_string(&file)?;
            count += contents.matches("@covers ").count() as u64;
        }
        Ok(count)
    }

    pub fn estimate(&self, path: &Path) -> Result<CoverageEstimate, TaskError> {
        if !self.report_path.exists() {
            return Err(TaskError::NotFound(format!(
                "No phploc report at {}",
                self.report_path.display()
            )));
        }

        let report = self.read_report()?;
        debug!(?report, "read phploc report");
        if report.public_methods == 0 {
            return Err(TaskError::NotFound("No public methods to cover".to_string()));
        }

        Ok(CoverageEstimate {
            public_methods: report.public_methods,
            covers_annotations: Self::count_covers_annotations(path)?,
            test_classes: report.test_classes,
            test_methods: report.test_methods,
        })
    }
}

impl Task for CoverageTask {
    fn set_path(&mut self, path: &Path) -> &mut dyn Task {
        self.path = Some(path.to_path_buf());
        self
    }

    fn execute(&mut self) -> TaskResult {
        let path = require_path(&self.path)?;
        let estimate = self.estimate(path)?;

        for line in estimate.summary() {
            info!("{}", line);
        }
        Ok(())
    }

    fn status_message(&self) -> String {
        "Estimating test coverage".to_string()
    }
}
