//! External command execution.
//!
//! Every installation action is a blocking shell-out. [`command`] holds the
//! low-level single-command layer; [`runner`] drives a whole plan through it
//! with fail-fast semantics.

pub mod command;
pub mod runner;

pub use command::{execute, CommandOptions, CommandResult};
pub use runner::{run_plan, CommandRunner, RunReport, ShellRunner};
