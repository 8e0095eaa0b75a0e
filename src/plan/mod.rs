//! Provisioning plans.
//!
//! A plan is the full, ordered list of shell commands a provisioning run will
//! execute, built up front from the resolved dependency sets. Building the
//! plan is pure (no environment reads, no side effects), which is what makes
//! `rigup plan` and `--dry-run` exact previews of a real run.

mod linux;
mod macos;

pub use linux::{FORENSICS_PPA, STALE_SOURCES_LIST};
pub use macos::{BINARIES_BRANCH, BINARIES_REPO};

use serde::Serialize;

use crate::catalog;
use crate::platform::{Platform, PythonVersion};

/// One shell command in a provisioning plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedCommand {
    /// Short human-readable label, shown as progress.
    pub label: String,

    /// The command line, run via `sh -c`.
    pub command: String,

    /// Package this command is for, when it targets a single package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl PlannedCommand {
    fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
            package: None,
        }
    }

    fn for_package(label: impl Into<String>, command: impl Into<String>, package: &str) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
            package: Some(package.to_string()),
        }
    }
}

/// Options that shape plan construction.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Prefix privileged commands with `sudo`.
    pub sudo: bool,

    /// Git URL of the pre-built binary repository (macOS).
    pub binaries_repo: String,

    /// Branch of the pre-built binary repository to clone (macOS).
    pub binaries_branch: String,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            sudo: true,
            binaries_repo: BINARIES_REPO.to_string(),
            binaries_branch: BINARIES_BRANCH.to_string(),
        }
    }
}

impl PlanOptions {
    /// `sudo ` prefix for privileged commands, or nothing when elevated.
    fn privilege_prefix(&self) -> &'static str {
        if self.sudo {
            "sudo "
        } else {
            ""
        }
    }
}

/// A fully resolved provisioning plan.
#[derive(Debug, Serialize)]
pub struct Plan {
    /// Platform marker the plan targets.
    pub platform: String,

    /// Interpreter branch the plan was resolved for.
    pub python: PythonVersion,

    /// Number of packages the plan installs.
    pub package_total: usize,

    /// Commands in execution order.
    pub commands: Vec<PlannedCommand>,
}

impl Plan {
    /// Whether the plan performs any work.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the provisioning plan for a (platform, interpreter) pair.
///
/// An unsupported platform yields an empty plan; deciding whether that is a
/// no-op or an error is the caller's business.
pub fn build(platform: &Platform, python: PythonVersion, options: &PlanOptions) -> Plan {
    let sets = catalog::resolve(platform, python);

    let commands = match platform {
        Platform::MacOs => macos::build(&sets, options),
        Platform::Linux => linux::build(&sets, options),
        Platform::Unknown(_) => Vec::new(),
    };

    Plan {
        platform: platform.to_string(),
        python,
        package_total: catalog::packages(&sets).len(),
        commands,
    }
}
