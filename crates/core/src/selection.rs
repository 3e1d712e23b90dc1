//! Task selection
//!
//! Translates the per-task flags into the ordered list of tasks to run.
//! No flag set means "run everything", and `coverage` pulls in `phploc`
//! because the coverage estimate is computed from the phploc report.

use std::fmt;

use crate::execution::TaskRunner;
use crate::options::PhpcsStandard;
use crate::task::{StandardTask, Task};

/// Identifier of each available check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskName {
    Composer,
    Phplint,
    Phpcs,
    Phpmd,
    Yamllint,
    Phploc,
    Coverage,
}

impl TaskName {
    /// Execution order, independent of which flags selected the tasks.
    /// `Phploc` precedes `Coverage`, which reads its report.
    pub const CANONICAL_ORDER: [TaskName; 7] = [
        TaskName::Composer,
        TaskName::Phplint,
        TaskName::Phpcs,
        TaskName::Phpmd,
        TaskName::Yamllint,
        TaskName::Phploc,
        TaskName::Coverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskName::Composer => "composer",
            TaskName::Phplint => "phplint",
            TaskName::Phpcs => "phpcs",
            TaskName::Phpmd => "phpmd",
            TaskName::Yamllint => "yamllint",
            TaskName::Phploc => "phploc",
            TaskName::Coverage => "coverage",
        }
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-task "include" requests
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionFlags {
    pub composer: bool,
    pub coverage: bool,
    pub phpcs: bool,
    pub phplint: bool,
    pub phploc: bool,
    pub phpmd: bool,
    pub yamllint: bool,
}

impl SelectionFlags {
    pub fn is_set(&self, name: TaskName) -> bool {
        match name {
            TaskName::Composer => self.composer,
            TaskName::Coverage => self.coverage,
            TaskName::Phpcs => self.phpcs,
            TaskName::Phplint => self.phplint,
            TaskName::Phploc => self.phploc,
            TaskName::Phpmd => self.phpmd,
            TaskName::Yamllint => self.yamllint,
        }
    }

    pub fn none_set(&self) -> bool {
        TaskName::CANONICAL_ORDER
            .iter()
            .all(|name| !self.is_set(*name))
    }

    /// Tasks to run, in canonical order, including implied ones
    pub fn selected(&self) -> Vec<TaskName> {
        let run_all = self.none_set();
        TaskName::CANONICAL_ORDER
            .into_iter()
            .filter(|name| run_all || self.is_set(*name) || self.implied(*name))
            .collect()
    }

    fn implied(&self, name: TaskName) -> bool {
        name == TaskName::Phploc && self.coverage
    }
}

/// One instance of every task, ready to be selected
pub struct TaskSet {
    pub composer: Box<dyn Task>,
    pub phplint: Box<dyn Task>,
    pub phpcs: Box<dyn StandardTask>,
    pub phpmd: Box<dyn Task>,
    pub yamllint: Box<dyn Task>,
    pub phploc: Box<dyn Task>,
    pub coverage: Box<dyn Task>,
}

/// Add the selected tasks to `runner` in canonical order.
///
/// `standard` is pushed into the phpcs task only when it is selected. Returns
/// the names of the tasks that were added.
pub fn select_tasks(
    flags: &SelectionFlags,
    standard: PhpcsStandard,
    tasks: TaskSet,
    runner: &mut TaskRunner,
) -> Vec<TaskName> {
    let selected = flags.selected();
    let TaskSet {
        composer,
        phplint,
        mut phpcs,
        phpmd,
        yamllint,
        phploc,
        coverage,
    } = tasks;

    if selected.contains(&TaskName::Phpcs) {
        phpcs.set_standard(standard);
    }

    let candidates = [
        (TaskName::Composer, composer),
        (TaskName::Phplint, phplint),
        (TaskName::Phpcs, phpcs.into_task()),
        (TaskName::Phpmd, phpmd),
        (TaskName::Yamllint, yamllint),
        (TaskName::Phploc, phploc),
        (TaskName::Coverage, coverage),
    ];

    for (name, task) in candidates {
        if selected.contains(&name) {
            runner.add_task(task);
        }
    }

    selected
}
