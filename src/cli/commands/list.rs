//! The `list` command: show the resolved dependency sets.

use anyhow::Context;

use crate::catalog;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (platform, python) = super::resolve_selectors(&self.args.selector);
        let sets = catalog::resolve(&platform, python);

        if self.args.json {
            let json = serde_json::to_string_pretty(&sets)
                .context("serializing dependency sets to JSON")?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if sets.is_empty() {
            ui.warning(&format!("No dependency sets apply to '{}'", platform));
            return Ok(CommandResult::success());
        }

        for set in sets {
            ui.message(&format!(
                "{} [{}] ({} packages)",
                set.name,
                set.category,
                set.len()
            ));
            for package in set.packages {
                ui.message(&format!("  {}", package));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SelectorArgs;
    use crate::ui::MockUI;

    fn args_for(os: &str, python: &str) -> ListArgs {
        ListArgs {
            selector: SelectorArgs {
                os: Some(os.to_string()),
                python: Some(python.to_string()),
            },
            json: false,
        }
    }

    #[test]
    fn lists_sets_with_their_packages() {
        let cmd = ListCommand::new(args_for("linux", "2.7"));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().iter().any(|m| m.contains("coverage")));
        assert!(ui.messages().iter().any(|m| m.contains("  python-mock")));
    }

    #[test]
    fn unknown_os_lists_nothing() {
        let cmd = ListCommand::new(args_for("freebsd", "3.8"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages().is_empty());
        assert_eq!(ui.warnings().len(), 1);
    }
}
