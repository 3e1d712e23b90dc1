//! Tool adapters
//!
//! Each adapter wraps one external analysis tool behind the [`Task`](crate::task::Task)
//! contract. Adapters only translate the tool's result into success, failure,
//! or "nothing to check"; the tool's own output is passed straight through.

pub mod composer_validate;
pub mod coverage;
pub mod phpcs;
pub mod phplint;
pub mod phploc;
pub mod phpmd;
pub mod yaml_lint;

pub use composer_validate::ComposerValidateTask;
pub use coverage::CoverageTask;
pub use phpcs::PhpcsTask;
pub use phplint::PhpLintTask;
pub use phploc::PhplocTask;
pub use phpmd::PhpmdTask;
pub use yaml_lint::YamlLintTask;

use crate::configs::tools::{ReportsDir, ToolsConfig};
use crate::selection::TaskSet;

/// Build one instance of every adapter from the tool configuration
///
/// phploc and coverage share `reports` for the phploc report.
pub fn task_set(config: &ToolsConfig, reports: &ReportsDir) -> TaskSet {
    TaskSet {
        composer: Box::new(ComposerValidateTask::new(config)),
        phplint: Box::new(PhpLintTask::new(config)),
        phpcs: Box::new(PhpcsTask::new(config)),
        phpmd: Box::new(PhpmdTask::new(config)),
        yamllint: Box::new(YamlLintTask::new()),
        phploc: Box::new(PhplocTask::new(config, reports)),
        coverage: Box::new(CoverageTask::new(reports)),
    }
}
