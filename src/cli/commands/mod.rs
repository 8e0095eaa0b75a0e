//! CLI subcommand implementations.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod plan;
pub mod provision;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::cli::args::{BinariesArgs, SelectorArgs};
use crate::plan::PlanOptions;
use crate::platform::{self, Platform, PythonVersion};

/// Resolve the platform/interpreter selectors shared by every subcommand.
pub(crate) fn resolve_selectors(selector: &SelectorArgs) -> (Platform, PythonVersion) {
    let platform = Platform::resolve(selector.os.as_deref());
    let python = PythonVersion::resolve(selector.python.as_deref());
    (platform, python)
}

/// Build plan options from CLI overrides.
///
/// `sudo` is on by default but dropped when the flag disables it or the
/// process is already elevated.
pub(crate) fn plan_options(binaries: &BinariesArgs, no_sudo: bool) -> PlanOptions {
    let defaults = PlanOptions::default();
    PlanOptions {
        sudo: !no_sudo && !platform::is_elevated(),
        binaries_repo: binaries
            .binaries_repo
            .clone()
            .unwrap_or(defaults.binaries_repo),
        binaries_branch: binaries
            .binaries_branch
            .clone()
            .unwrap_or(defaults.binaries_branch),
    }
}
