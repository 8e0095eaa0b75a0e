//! Fail-fast plan execution.
//!
//! [`run_plan`] walks a plan strictly in order, one blocking command at a
//! time, and aborts on the first non-zero exit. There is no retry, no
//! rollback, and no distinction between transient and permanent failures;
//! whatever already ran stays applied.

use std::time::Instant;

use crate::error::{Result, RigupError};
use crate::plan::{Plan, PlannedCommand};
use crate::ui::UserInterface;

use super::command::{execute, CommandOptions, CommandResult};

/// Executes a single planned command.
///
/// The trait seam exists so tests can drive [`run_plan`] with scripted
/// results instead of touching the host package database.
pub trait CommandRunner {
    fn run(&mut self, command: &PlannedCommand) -> Result<CommandResult>;
}

/// Production runner: executes commands through the shell.
pub struct ShellRunner {
    options: CommandOptions,
}

impl ShellRunner {
    /// Runner for normal output: child output captured, stderr reported on
    /// failure.
    pub fn new() -> Self {
        Self {
            options: CommandOptions {
                capture_stdout: true,
                capture_stderr: true,
                ..Default::default()
            },
        }
    }

    /// Runner for verbose output: child stdio inherited so install logs
    /// stream straight to the CI log.
    pub fn inherited() -> Self {
        Self {
            options: CommandOptions::default(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &PlannedCommand) -> Result<CommandResult> {
        execute(&command.command, &self.options)
    }
}

/// Summary of a completed provisioning run.
#[derive(Debug)]
pub struct RunReport {
    /// Number of commands executed (all of them, on success).
    pub executed: usize,

    /// Total wall-clock duration.
    pub duration: std::time::Duration,
}

/// Execute every command in the plan, stopping at the first failure.
///
/// On failure the returned error carries the failing command line, its exit
/// code, and captured stderr; commands after it never run.
pub fn run_plan(
    plan: &Plan,
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<RunReport> {
    let start = Instant::now();
    let total = plan.commands.len();

    for (index, command) in plan.commands.iter().enumerate() {
        ui.step_started(index + 1, total, &command.label);
        tracing::debug!(command = %command.command, "executing");

        let result = runner.run(command)?;

        if !result.success {
            ui.step_failed(&command.label);
            return Err(RigupError::CommandFailed {
                command: command.command.clone(),
                code: result.exit_code,
                stderr: result.stderr,
            });
        }

        ui.step_completed(&command.label, result.duration);
    }

    Ok(RunReport {
        executed: total,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{build, PlanOptions};
    use crate::platform::{Platform, PythonVersion};
    use crate::ui::MockUI;
    use std::time::Duration;

    /// Runner that returns scripted exit codes and records what ran.
    struct ScriptedRunner {
        exit_codes: Vec<i32>,
        ran: Vec<String>,
    }

    impl ScriptedRunner {
        fn new(exit_codes: Vec<i32>) -> Self {
            Self {
                exit_codes,
                ran: Vec::new(),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, command: &PlannedCommand) -> Result<CommandResult> {
            let code = self.exit_codes[self.ran.len()];
            self.ran.push(command.command.clone());
            if code == 0 {
                Ok(CommandResult::success(
                    String::new(),
                    String::new(),
                    Duration::ZERO,
                ))
            } else {
                Ok(CommandResult::failure(
                    Some(code),
                    String::new(),
                    "scripted failure".into(),
                    Duration::ZERO,
                ))
            }
        }
    }

    fn linux_plan() -> Plan {
        build(
            &Platform::Linux,
            PythonVersion::Python3,
            &PlanOptions::default(),
        )
    }

    #[test]
    fn all_commands_run_on_success() {
        let plan = linux_plan();
        let mut runner = ScriptedRunner::new(vec![0; plan.commands.len()]);
        let mut ui = MockUI::new();

        let report = run_plan(&plan, &mut runner, &mut ui).unwrap();

        assert_eq!(report.executed, plan.commands.len());
        assert_eq!(runner.ran.len(), plan.commands.len());
    }

    #[test]
    fn first_failure_stops_the_run() {
        let plan = linux_plan();
        let mut codes = vec![0; plan.commands.len()];
        codes[1] = 100;
        let mut runner = ScriptedRunner::new(codes);
        let mut ui = MockUI::new();

        let err = run_plan(&plan, &mut runner, &mut ui).unwrap_err();

        // The failing command ran, nothing after it did.
        assert_eq!(runner.ran.len(), 2);
        match err {
            RigupError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(100));
                assert_eq!(stderr, "scripted failure");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_error_carries_the_command_line() {
        let plan = linux_plan();
        let mut codes = vec![0; plan.commands.len()];
        codes[0] = 1;
        let mut runner = ScriptedRunner::new(codes);
        let mut ui = MockUI::new();

        let err = run_plan(&plan, &mut runner, &mut ui).unwrap_err();

        match err {
            RigupError::CommandFailed { command, .. } => {
                assert_eq!(command, plan.commands[0].command);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ui_sees_each_step_exactly_once() {
        let plan = linux_plan();
        let mut runner = ScriptedRunner::new(vec![0; plan.commands.len()]);
        let mut ui = MockUI::new();

        run_plan(&plan, &mut runner, &mut ui).unwrap();

        assert_eq!(ui.steps_started().len(), plan.commands.len());
        assert_eq!(ui.steps_completed().len(), plan.commands.len());
        assert!(ui.steps_failed().is_empty());
    }

    #[test]
    fn empty_plan_reports_zero_commands() {
        let plan = build(
            &Platform::Unknown("freebsd".into()),
            PythonVersion::Python3,
            &PlanOptions::default(),
        );
        let mut runner = ScriptedRunner::new(Vec::new());
        let mut ui = MockUI::new();

        let report = run_plan(&plan, &mut runner, &mut ui).unwrap();

        assert_eq!(report.executed, 0);
    }
}
