//! The `provision` command: resolve the plan and run it.

use crate::cli::args::ProvisionArgs;
use crate::error::{Result, RigupError};
use crate::exec::{run_plan, ShellRunner};
use crate::plan;
use crate::ui::{format_duration, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// How many trailing stderr lines to surface when a command fails.
const STDERR_TAIL_LINES: usize = 10;

/// The provision command implementation.
pub struct ProvisionCommand {
    args: ProvisionArgs,
}

impl ProvisionCommand {
    /// Create a new provision command.
    pub fn new(args: ProvisionArgs) -> Self {
        Self { args }
    }
}

impl Command for ProvisionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (platform, python) = super::resolve_selectors(&self.args.selector);

        if !platform.is_supported() {
            if self.args.strict {
                return Err(RigupError::UnsupportedPlatform {
                    os: platform.to_string(),
                });
            }
            ui.warning(&format!(
                "No provisioning procedure for '{}'; nothing to do",
                platform
            ));
            return Ok(CommandResult::success());
        }

        let options = super::plan_options(&self.args.binaries, self.args.no_sudo);
        let plan = plan::build(&platform, python, &options);

        tracing::info!(
            platform = %platform,
            python = %python,
            commands = plan.commands.len(),
            packages = plan.package_total,
            "resolved provisioning plan"
        );
        ui.message(&format!(
            "Provisioning {} dependencies for {} ({} packages)",
            python, platform, plan.package_total
        ));

        if self.args.dry_run {
            ui.message("dry-run mode: printing plan without executing");
            for command in &plan.commands {
                ui.message(&command.command);
            }
            return Ok(CommandResult::success());
        }

        let mut runner = if ui.output_mode().shows_command_output() {
            ShellRunner::inherited()
        } else {
            ShellRunner::new()
        };

        match run_plan(&plan, &mut runner, ui) {
            Ok(report) => {
                ui.success(&format!(
                    "Provisioning complete: {} commands in {}",
                    report.executed,
                    format_duration(report.duration)
                ));
                Ok(CommandResult::success())
            }
            Err(err @ RigupError::CommandFailed { .. }) => {
                let exit_code = err.exit_code();
                if let RigupError::CommandFailed { command, stderr, .. } = &err {
                    ui.error(&format!("Command failed: {}", command));
                    for line in stderr_tail(stderr) {
                        ui.error(line);
                    }
                }
                Ok(CommandResult::failure(exit_code))
            }
            Err(other) => Err(other),
        }
    }
}

/// Last few stderr lines of a failed command, skipping trailing blanks.
fn stderr_tail(stderr: &str) -> Vec<&str> {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].to_vec()
}
