//! macOS plan construction.
//!
//! macOS has no package source to register; instead a repository of pre-built
//! disk images is cloned next to the working directory and every bundle is
//! installed through a mount, install, unmount triad. The image file name
//! carries a version/revision suffix, matched by a shell wildcard.

use crate::catalog::DependencySet;

use super::{PlanOptions, PlannedCommand};

/// Git URL of the pre-built binary repository.
pub const BINARIES_REPO: &str = "https://github.com/log2timeline/l2tbinaries.git";

/// Branch of the binary repository the images are taken from.
pub const BINARIES_BRANCH: &str = "dev";

/// Where the binary repository is cloned, as a sibling of the working
/// directory so repeated CI checkouts don't nest clones.
const BINARIES_DIR: &str = "../l2tbinaries";

pub(super) fn build(
    sets: &[&'static DependencySet],
    options: &PlanOptions,
) -> Vec<PlannedCommand> {
    let sudo = options.privilege_prefix();

    let mut commands = vec![PlannedCommand::new(
        "fetch pre-built binary bundles",
        format!(
            "git clone --branch {} {} {}",
            options.binaries_branch, options.binaries_repo, BINARIES_DIR
        ),
    )];

    for set in sets {
        for &package in set.packages {
            commands.push(PlannedCommand::for_package(
                format!("mount {} image", package),
                format!("{}hdiutil attach {}/macos/{}-*.dmg", sudo, BINARIES_DIR, package),
                package,
            ));
            commands.push(PlannedCommand::for_package(
                format!("install {}", package),
                format!(
                    "{}installer -target / -pkg /Volumes/{pkg}-*/{pkg}-*.pkg",
                    sudo,
                    pkg = package
                ),
                package,
            ));
            commands.push(PlannedCommand::for_package(
                format!("unmount {} image", package),
                format!("{}hdiutil detach /Volumes/{}-*", sudo, package),
                package,
            ));
        }
    }

    commands
}
