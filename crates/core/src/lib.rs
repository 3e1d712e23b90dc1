//! ORCA Core Library
//!
//! This is the core library behind `orca qa:static-analysis`. It selects a set
//! of independent quality checks for a path, runs them one after another, and
//! reduces their outcomes to a single pass/fail status.
//!
//! ## Architecture
//!
//! - [`static_analysis`] - Command flow: pre-flight validation, selection, run
//! - [`selection`] - Which tasks run, in what order
//! - [`options`] - Enumerated option resolution (the phpcs standard)
//! - [`execution`] - Sequential task runner and process execution
//! - [`task`] - The task contract
//! - [`tools`] - One adapter per external tool
//! - [`files`] - Glob-based file discovery
//! - [`configs`] - Tool configuration parsing
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use orca_core::configs::tools::{ReportsDir, ToolsConfig};
//! use orca_core::execution::TaskRunner;
//! use orca_core::static_analysis::{LocalFilesystem, StaticAnalysis, StaticAnalysisRequest};
//! use orca_core::tools;
//! use std::path::PathBuf;
//!
//! # fn example() -> orca_core::types::OrcaResult<()> {
//! let request = StaticAnalysisRequest {
//!     path: PathBuf::from("."),
//!     ..StaticAnalysisRequest::default()
//! };
//! let config = ToolsConfig::default();
//! let reports = ReportsDir::for_config(&config)?;
//! let verdict = StaticAnalysis::new(&LocalFilesystem, None).execute(
//!     &request,
//!     tools::task_set(&config, &reports),
//!     &mut TaskRunner::new(),
//! )?;
//! std::process::exit(verdict.status().exit_code().into());
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod files;
pub mod options;
pub mod selection;
pub mod static_analysis;
pub mod task;
pub mod tools;
pub mod types;

// Re-export the main types for easier usage
pub use execution::{StatusCode, TaskRunner};
pub use task::{Task, TaskError};
pub use types::{OrcaError, OrcaResult};
