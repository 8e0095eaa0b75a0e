//! The `plan` command: preview the provisioning plan.

use anyhow::Context;

use crate::cli::args::PlanArgs;
use crate::error::Result;
use crate::plan;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The plan command implementation.
pub struct PlanCommand {
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(args: PlanArgs) -> Self {
        Self { args }
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (platform, python) = super::resolve_selectors(&self.args.selector);
        let options = super::plan_options(&self.args.binaries, self.args.no_sudo);
        let plan = plan::build(&platform, python, &options);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&plan).context("serializing plan to JSON")?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if plan.is_empty() {
            ui.warning(&format!(
                "No provisioning procedure for '{}'; plan is empty",
                platform
            ));
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "Plan for {} / {} ({} packages, {} commands):",
            platform,
            python,
            plan.package_total,
            plan.commands.len()
        ));
        for (index, command) in plan.commands.iter().enumerate() {
            ui.message(&format!("{:>3}. {}", index + 1, command.command));
        }

        Ok(CommandResult::success())
    }
}
