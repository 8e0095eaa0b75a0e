//! Linux plan construction.
//!
//! Installs come from the forensics PPA via apt. The procedure is: drop the
//! stale package-source file some CI images still carry, register the PPA,
//! refresh the index, then install every resolved package in one batch.

use crate::catalog::{self, DependencySet};

use super::{PlanOptions, PlannedCommand};

/// Stale package-source declaration left behind on older CI images.
/// Removed up front so `apt-get update` doesn't trip over it.
pub const STALE_SOURCES_LIST: &str = "/etc/apt/sources.list.d/travis_ci_zeromq3-source.list";

/// PPA carrying the forensics format libraries and their Python bindings.
pub const FORENSICS_PPA: &str = "ppa:gift/dev";

pub(super) fn build(
    sets: &[&'static DependencySet],
    options: &PlanOptions,
) -> Vec<PlannedCommand> {
    let sudo = options.privilege_prefix();
    let packages = catalog::packages(sets);

    let mut commands = vec![
        PlannedCommand::new(
            "remove stale package source",
            format!("{}rm -f {}", sudo, STALE_SOURCES_LIST),
        ),
        PlannedCommand::new(
            "register forensics package source",
            format!("{}add-apt-repository -y {}", sudo, FORENSICS_PPA),
        ),
        PlannedCommand::new(
            "refresh package index",
            format!("{}apt-get update -q", sudo),
        ),
    ];

    commands.push(PlannedCommand::new(
        format!("install {} packages", packages.len()),
        format!("{}apt-get install -y {}", sudo, packages.join(" ")),
    ));

    commands
}
