//! Task execution module
//!
//! This module handles running the selected tasks in order and spawning the
//! external programs behind them.

pub mod command;
pub mod runner;

pub use command::CommandExecutor;
pub use runner::{StatusCode, TaskRunner};
