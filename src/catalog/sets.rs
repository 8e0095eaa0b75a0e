//! The shipped dependency sets.
//!
//! Package names follow the two repositories the provisioner installs from:
//! the forensics PPA on Linux (apt package names, with `-python` /
//! `-python3` binding suffixes) and the pre-built binary repository on macOS
//! (disk-image bundle names, no interpreter suffix).

use super::{Category, DependencySet};

/// Coverage reporting tools, legacy interpreter branch only.
pub static COVERAGE: DependencySet = DependencySet {
    name: "coverage",
    category: Category::Coverage,
    packages: &["python-coverage", "python-coveralls", "python-docopt"],
};

/// Format libraries and bindings for the legacy interpreter.
pub static PYTHON2_RUNTIME: DependencySet = DependencySet {
    name: "python2-runtime",
    category: Category::Runtime,
    packages: &[
        "libbde-python",
        "libewf-python",
        "libfsapfs-python",
        "libfsntfs-python",
        "libfvde-python",
        "libfwnt-python",
        "libqcow-python",
        "libsigscan-python",
        "libsmdev-python",
        "libsmraw-python",
        "libvhdi-python",
        "libvmdk-python",
        "libvshadow-python",
        "libvslvm-python",
        "python-construct",
        "python-crypto",
        "python-dfdatetime",
        "python-dtfabric",
        "python-pytsk3",
        "python-six",
    ],
};

/// Test helpers for the legacy interpreter.
pub static PYTHON2_TEST: DependencySet = DependencySet {
    name: "python2-test",
    category: Category::Test,
    packages: &["python-mock", "python-pbr"],
};

/// Format libraries and bindings for the current interpreter.
pub static PYTHON3_RUNTIME: DependencySet = DependencySet {
    name: "python3-runtime",
    category: Category::Runtime,
    packages: &[
        "libbde-python3",
        "libewf-python3",
        "libfsapfs-python3",
        "libfsntfs-python3",
        "libfvde-python3",
        "libfwnt-python3",
        "libqcow-python3",
        "libsigscan-python3",
        "libsmdev-python3",
        "libsmraw-python3",
        "libvhdi-python3",
        "libvmdk-python3",
        "libvshadow-python3",
        "libvslvm-python3",
        "python3-construct",
        "python3-crypto",
        "python3-dfdatetime",
        "python3-dtfabric",
        "python3-pytsk3",
        "python3-six",
    ],
};

/// Test helpers for the current interpreter.
pub static PYTHON3_TEST: DependencySet = DependencySet {
    name: "python3-test",
    category: Category::Test,
    packages: &["python3-mock", "python3-pbr"],
};

/// Disk-image bundles installed on macOS, runtime portion.
pub static MACOS_RUNTIME: DependencySet = DependencySet {
    name: "macos-runtime",
    category: Category::Runtime,
    packages: &[
        "libbde",
        "libewf",
        "libfsapfs",
        "libfsntfs",
        "libfvde",
        "libfwnt",
        "libqcow",
        "libsigscan",
        "libsmdev",
        "libsmraw",
        "libvhdi",
        "libvmdk",
        "libvshadow",
        "libvslvm",
        "construct",
        "dfdatetime",
        "dtfabric",
        "pytsk",
        "six",
    ],
};

/// Disk-image bundles installed on macOS, test portion.
pub static MACOS_TEST: DependencySet = DependencySet {
    name: "macos-test",
    category: Category::Test,
    packages: &["mock", "pbr"],
};
