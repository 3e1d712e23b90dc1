//! The static analysis command
//!
//! Validates the target path and the phpcs standard before anything runs, then
//! selects the tasks and hands them to a [`TaskRunner`]. Pre-flight problems
//! abort the run with a single diagnostic and no task is executed.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::execution::{StatusCode, TaskRunner};
use crate::options::{OptionError, PhpcsStandard, PHPCS_STANDARD};
use crate::selection::{select_tasks, SelectionFlags, TaskSet};
use crate::types::OrcaResult;

/// Filesystem existence check
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// [`PathProbe`] backed by the local filesystem
pub struct LocalFilesystem;

impl PathProbe for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Problems detected before any task runs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreflightError {
    #[error("No such path: {0}.")]
    NoSuchPath(String),

    #[error(transparent)]
    InvalidOption(#[from] OptionError),
}

/// Everything a single invocation asks for
#[derive(Debug, Clone, Default)]
pub struct StaticAnalysisRequest {
    pub path: PathBuf,
    pub flags: SelectionFlags,
    /// Value of `--phpcs-standard`, if given
    pub phpcs_standard: Option<String>,
}

/// Result of an invocation
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Completed(StatusCode),
    Aborted(PreflightError),
}

impl Verdict {
    pub fn status(&self) -> StatusCode {
        match self {
            Verdict::Completed(status) => *status,
            Verdict::Aborted(_) => StatusCode::Error,
        }
    }

    /// The single line to print on the error stream, if any
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Verdict::Completed(_) => None,
            Verdict::Aborted(e) => Some(format!("Error: {}", e)),
        }
    }
}

/// Command state resolved at the process boundary
pub struct StaticAnalysis<'a> {
    filesystem: &'a dyn PathProbe,
    /// Value of `$ORCA_PHPCS_STANDARD`, if set
    env_standard: Option<String>,
}

impl<'a> StaticAnalysis<'a> {
    pub fn new(filesystem: &'a dyn PathProbe, env_standard: Option<String>) -> Self {
        Self {
            filesystem,
            env_standard,
        }
    }

    fn preflight(&self, request: &StaticAnalysisRequest) -> Result<PhpcsStandard, PreflightError> {
        if !self.filesystem.exists(&request.path) {
            return Err(PreflightError::NoSuchPath(
                request.path.display().to_string(),
            ));
        }

        let resolved = PHPCS_STANDARD.resolve(
            request.phpcs_standard.as_deref(),
            self.env_standard.as_deref(),
            PhpcsStandard::default(),
        )?;
        debug!(standard = %resolved.value, source = ?resolved.source, "resolved phpcs standard");
        Ok(resolved.value)
    }

    /// Validate, select, and run.
    ///
    /// Only adapter defects surface as `Err`; QA failures and pre-flight
    /// problems are part of the [`Verdict`].
    pub fn execute(
        &self,
        request: &StaticAnalysisRequest,
        tasks: TaskSet,
        runner: &mut TaskRunner,
    ) -> OrcaResult<Verdict> {
        let standard = match self.preflight(request) {
            Ok(standard) => standard,
            Err(e) => return Ok(Verdict::Aborted(e)),
        };

        select_tasks(&request.flags, standard, tasks, runner);
        let status = runner.set_path(&request.path).run()?;
        Ok(Verdict::Completed(status))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::*;
    use crate::selection::tests::{fake_task_set, SharedJournal};
    use crate::selection::TaskName;
    use crate::task::{TaskError, TaskResult};
    use crate::types::OrcaError;

    const SUT_PATH: &str = "/var/www/example";

    struct FakeFilesystem {
        exists: bool,
        calls: Cell<usize>,
    }

    impl FakeFilesystem {
        fn new(exists: bool) -> Self {
            Self {
                exists,
                calls: Cell::new(0),
            }
        }
    }

    impl PathProbe for FakeFilesystem {
        fn exists(&self, path: &Path) -> bool {
            assert_eq!(path, Path::new(SUT_PATH));
            self.calls.set(self.calls.get() + 1);
            self.exists
        }
    }

    fn request(flags: SelectionFlags, phpcs_standard: Option<&str>) -> StaticAnalysisRequest {
        StaticAnalysisRequest {
            path: PathBuf::from(SUT_PATH),
            flags,
            phpcs_standard: phpcs_standard.map(str::to_string),
        }
    }

    fn executed(journal: &SharedJournal) -> Vec<TaskName> {
        journal.borrow().executed.iter().map(|(name, _)| *name).collect()
    }

    fn fail() -> TaskResult {
        Err(TaskError::Failure("lint errors".to_string()))
    }

    fn not_found() -> TaskResult {
        Err(TaskError::NotFound("no files".to_string()))
    }

    fn defect() -> TaskResult {
        Err(TaskError::PathNotSet)
    }

    #[test]
    fn test_clean_run_executes_everything_once() {
        let filesystem = FakeFilesystem::new(true);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();

        let verdict = StaticAnalysis::new(&filesystem, None)
            .execute(
                &request(SelectionFlags::default(), None),
                fake_task_set(&journal, &[]),
                &mut runner,
            )
            .unwrap();

        assert_eq!(verdict, Verdict::Completed(StatusCode::Ok));
        assert_eq!(verdict.diagnostic(), None);
        assert_eq!(verdict.status().exit_code(), 0);
        assert_eq!(filesystem.calls.get(), 1);
        assert_eq!(executed(&journal), TaskName::CANONICAL_ORDER.to_vec());
        for (_, path) in journal.borrow().executed.iter() {
            assert_eq!(path, Path::new(SUT_PATH));
        }
    }

    #[test]
    fn test_missing_path_aborts_before_any_task() {
        let filesystem = FakeFilesystem::new(false);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();

        let verdict = StaticAnalysis::new(&filesystem, None)
            .execute(
                &request(SelectionFlags::default(), None),
                fake_task_set(&journal, &[]),
                &mut runner,
            )
            .unwrap();

        assert_eq!(verdict.status(), StatusCode::Error);
        assert_eq!(verdict.status().exit_code(), 1);
        assert_eq!(
            verdict.diagnostic().as_deref(),
            Some("Error: No such path: /var/www/example.")
        );
        assert!(runner.is_empty());
        assert!(executed(&journal).is_empty());
    }

    #[test]
    fn test_failed_check_still_runs_everything() {
        let filesystem = FakeFilesystem::new(true);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();

        let verdict = StaticAnalysis::new(&filesystem, None)
            .execute(
                &request(SelectionFlags::default(), None),
                fake_task_set(&journal, &[(TaskName::Phplint, fail)]),
                &mut runner,
            )
            .unwrap();

        assert_eq!(verdict, Verdict::Completed(StatusCode::Error));
        assert_eq!(verdict.diagnostic(), None);
        assert_eq!(executed(&journal).len(), 7);
    }

    #[test]
    fn test_coverage_with_nothing_to_scan_passes() {
        let filesystem = FakeFilesystem::new(true);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();

        let verdict = StaticAnalysis::new(&filesystem, None)
            .execute(
                &request(SelectionFlags::default(), None),
                fake_task_set(&journal, &[(TaskName::Coverage, not_found)]),
                &mut runner,
            )
            .unwrap();

        assert_eq!(verdict, Verdict::Completed(StatusCode::Ok));
    }

    #[test]
    fn test_adapter_defect_is_an_error() {
        let filesystem = FakeFilesystem::new(true);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();

        let result = StaticAnalysis::new(&filesystem, None).execute(
            &request(SelectionFlags::default(), None),
            fake_task_set(&journal, &[(TaskName::Phpcs, defect)]),
            &mut runner,
        );

        assert!(matches!(result, Err(OrcaError::Task { .. })));
    }

    #[rstest]
    #[case(None, None, PhpcsStandard::AcquiaDrupalTransitional)]
    #[case(Some("AcquiaPHP"), None, PhpcsStandard::AcquiaPhp)]
    #[case(Some("AcquiaDrupalStrict"), Some("AcquiaPHP"), PhpcsStandard::AcquiaDrupalStrict)]
    #[case(None, Some("AcquiaPHP"), PhpcsStandard::AcquiaPhp)]
    #[case(None, Some("AcquiaDrupalStrict"), PhpcsStandard::AcquiaDrupalStrict)]
    fn test_phpcs_standard_reaches_task(
        #[case] option: Option<&str>,
        #[case] env: Option<&str>,
        #[case] expected: PhpcsStandard,
    ) {
        let filesystem = FakeFilesystem::new(true);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();
        let flags = SelectionFlags {
            phpcs: true,
            ..SelectionFlags::default()
        };

        let verdict = StaticAnalysis::new(&filesystem, env.map(str::to_string))
            .execute(&request(flags, option), fake_task_set(&journal, &[]), &mut runner)
            .unwrap();

        assert_eq!(verdict, Verdict::Completed(StatusCode::Ok));
        assert_eq!(journal.borrow().standards, vec![expected]);
        assert_eq!(executed(&journal), vec![TaskName::Phpcs]);
    }

    #[rstest]
    #[case(
        Some("invalid"),
        None,
        r#"Error: Invalid value for "--phpcs-standard" option: "invalid"."#
    )]
    #[case(
        None,
        Some("invalid"),
        r#"Error: Invalid value for $ORCA_PHPCS_STANDARD environment variable: "invalid"."#
    )]
    fn test_invalid_phpcs_standard_aborts(
        #[case] option: Option<&str>,
        #[case] env: Option<&str>,
        #[case] expected: &str,
    ) {
        let filesystem = FakeFilesystem::new(true);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();
        let flags = SelectionFlags {
            phpcs: true,
            ..SelectionFlags::default()
        };

        let verdict = StaticAnalysis::new(&filesystem, env.map(str::to_string))
            .execute(&request(flags, option), fake_task_set(&journal, &[]), &mut runner)
            .unwrap();

        assert_eq!(verdict.status(), StatusCode::Error);
        assert_eq!(verdict.diagnostic().as_deref(), Some(expected));
        assert_eq!(filesystem.calls.get(), 1);
        assert!(runner.is_empty());
        assert!(journal.borrow().standards.is_empty());
        assert!(executed(&journal).is_empty());
    }

    #[test]
    fn test_missing_path_reported_before_invalid_standard() {
        let filesystem = FakeFilesystem::new(false);
        let journal = SharedJournal::default();
        let mut runner = TaskRunner::new();

        let verdict = StaticAnalysis::new(&filesystem, Some("invalid".to_string()))
            .execute(
                &request(SelectionFlags::default(), None),
                fake_task_set(&journal, &[]),
                &mut runner,
            )
            .unwrap();

        assert!(matches!(verdict, Verdict::Aborted(PreflightError::NoSuchPath(_))));
    }

    #[test]
    fn test_local_filesystem_probe() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalFilesystem.exists(dir.path()));
        assert!(!LocalFilesystem.exists(&dir.path().join("missing")));
    }
}
