//! Dependency catalog.
//!
//! The packages a CI machine needs are fixed, named sets of package-name
//! strings, keyed by (platform, interpreter version, category). The sets are
//! compile-time constants; nothing at runtime adds to or removes from them.
//! [`resolve`] maps the two selectors to the sets that apply, in the order
//! they install.

mod sets;

pub use sets::{
    COVERAGE, MACOS_RUNTIME, MACOS_TEST, PYTHON2_RUNTIME, PYTHON2_TEST, PYTHON3_RUNTIME,
    PYTHON3_TEST,
};

use serde::Serialize;

use crate::platform::{Platform, PythonVersion};

/// What role a dependency set plays in the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Runtime,
    Test,
    Coverage,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Runtime => "runtime",
            Category::Test => "test",
            Category::Coverage => "coverage",
        };
        write!(f, "{}", s)
    }
}

/// A named, immutable, ordered collection of package names.
#[derive(Debug, Serialize)]
pub struct DependencySet {
    /// Set name, used in logs and `list` output.
    pub name: &'static str,
    pub category: Category,
    /// Package names in install order.
    pub packages: &'static [&'static str],
}

impl DependencySet {
    /// Number of packages in the set.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the set is empty. Never true for the shipped catalog.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Resolve the dependency sets that apply to a (platform, interpreter) pair,
/// in install order.
///
/// macOS installs from the pre-built binary bundles and does not branch on
/// the interpreter. Linux installs the coverage tooling only on the legacy
/// interpreter branch. An unsupported platform resolves to no sets at all.
pub fn resolve(platform: &Platform, python: PythonVersion) -> Vec<&'static DependencySet> {
    match platform {
        Platform::MacOs => vec![&MACOS_RUNTIME, &MACOS_TEST],
        Platform::Linux => match python {
            PythonVersion::Python2 => vec![&COVERAGE, &PYTHON2_RUNTIME, &PYTHON2_TEST],
            PythonVersion::Python3 => vec![&PYTHON3_RUNTIME, &PYTHON3_TEST],
        },
        Platform::Unknown(_) => Vec::new(),
    }
}

/// Flatten resolved sets into one ordered package list.
pub fn packages(sets: &[&'static DependencySet]) -> Vec<&'static str> {
    sets.iter().flat_map(|s| s.packages.iter().copied()).collect()
}
