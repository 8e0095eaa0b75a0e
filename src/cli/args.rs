//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The platform selectors fall
//! back to the CI environment variables via clap's `env` support, so a bare
//! `rigup` inside a CI job picks up its matrix leg automatically.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// rigup - CI dependency provisioning for the forensics tool-chain.
#[derive(Debug, Parser)]
#[command(name = "rigup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Stream package manager output live
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the dependency stack (default if no command specified)
    Provision(ProvisionArgs),

    /// Show the resolved command plan without executing it
    Plan(PlanArgs),

    /// Show the dependency sets that apply to the selectors
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Platform and interpreter selectors, shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectorArgs {
    /// Target OS marker (osx, macos or linux); defaults to the CI
    /// environment, then the host OS
    #[arg(long, env = "TRAVIS_OS_NAME", value_name = "OS")]
    pub os: Option<String>,

    /// Interpreter version marker (2.7 selects the legacy branch)
    #[arg(long, env = "TRAVIS_PYTHON_VERSION", value_name = "VERSION")]
    pub python: Option<String>,
}

/// Overrides for the pre-built binary repository used on macOS.
#[derive(Debug, Clone, Default, Args)]
pub struct BinariesArgs {
    /// Git URL of the pre-built binary repository
    #[arg(long, value_name = "URL")]
    pub binaries_repo: Option<String>,

    /// Branch of the pre-built binary repository
    #[arg(long, value_name = "BRANCH")]
    pub binaries_branch: Option<String>,
}

/// Arguments for the `provision` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ProvisionArgs {
    #[command(flatten)]
    pub selector: SelectorArgs,

    #[command(flatten)]
    pub binaries: BinariesArgs,

    /// Print the plan without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Treat an unrecognized OS as an error instead of a no-op
    #[arg(long)]
    pub strict: bool,

    /// Never prefix commands with sudo
    #[arg(long)]
    pub no_sudo: bool,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selector: SelectorArgs,

    #[command(flatten)]
    pub binaries: BinariesArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Never prefix commands with sudo
    #[arg(long)]
    pub no_sudo: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub selector: SelectorArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn provision_parses_selectors() {
        let cli = Cli::parse_from(["rigup", "provision", "--os", "linux", "--python", "2.7"]);
        match cli.command {
            Some(Commands::Provision(args)) => {
                assert_eq!(args.selector.os.as_deref(), Some("linux"));
                assert_eq!(args.selector.python.as_deref(), Some("2.7"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn plan_parses_json_flag() {
        let cli = Cli::parse_from(["rigup", "plan", "--os", "osx", "--json"]);
        match cli.command {
            Some(Commands::Plan(args)) => {
                assert!(args.json);
                assert_eq!(args.selector.os.as_deref(), Some("osx"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::parse_from(["rigup", "plan", "--quiet"]);
        assert!(cli.quiet);
    }
}
