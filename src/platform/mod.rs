//! Platform and interpreter selectors.
//!
//! Provisioning is driven by two inputs: the target operating system and the
//! Python interpreter version the CI job is testing against. Both arrive via
//! CLI flags or the CI environment (`TRAVIS_OS_NAME`, `TRAVIS_PYTHON_VERSION`)
//! and are resolved here into closed selector types. Everything downstream of
//! this module is a pure function of the two selectors.

use serde::Serialize;

/// Environment variable carrying the OS identifier in CI.
pub const OS_ENV_VAR: &str = "TRAVIS_OS_NAME";

/// Environment variable carrying the interpreter version marker in CI.
pub const PYTHON_ENV_VAR: &str = "TRAVIS_PYTHON_VERSION";

/// Interpreter version marker that selects the legacy dependency branch.
const LEGACY_PYTHON_MARKER: &str = "2.7";

/// Target platform for a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    /// An identifier we don't provision for. Carries the raw marker for
    /// diagnostics.
    Unknown(String),
}

impl Platform {
    /// Parse a platform from an OS identifier.
    ///
    /// Accepts the CI marker `osx` as well as the plain `macos` spelling.
    pub fn parse(marker: &str) -> Self {
        match marker {
            "osx" | "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            other => Platform::Unknown(other.to_string()),
        }
    }

    /// The platform this binary was compiled for.
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Unknown(std::env::consts::OS.to_string())
        }
    }

    /// Resolve the platform from an explicit override, the CI environment,
    /// or the host, in that order.
    pub fn resolve(explicit: Option<&str>) -> Self {
        match explicit {
            Some(marker) => Platform::parse(marker),
            None => match std::env::var(OS_ENV_VAR) {
                Ok(marker) => Platform::parse(&marker),
                Err(_) => Platform::host(),
            },
        }
    }

    /// Whether this is a platform we know how to provision.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unknown(_))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Unknown(other) => other.as_str(),
        };
        write!(f, "{}", s)
    }
}

/// Interpreter generation the dependency catalog branches on.
///
/// Only the legacy marker is matched exactly; every other value, including an
/// absent one, selects the current branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PythonVersion {
    Python2,
    Python3,
}

impl PythonVersion {
    /// Parse an interpreter version marker.
    pub fn parse(marker: &str) -> Self {
        if marker == LEGACY_PYTHON_MARKER {
            PythonVersion::Python2
        } else {
            PythonVersion::Python3
        }
    }

    /// Resolve the interpreter version from an explicit override or the CI
    /// environment. Absence means the current branch.
    pub fn resolve(explicit: Option<&str>) -> Self {
        match explicit {
            Some(marker) => PythonVersion::parse(marker),
            None => match std::env::var(PYTHON_ENV_VAR) {
                Ok(marker) => PythonVersion::parse(&marker),
                Err(_) => PythonVersion::Python3,
            },
        }
    }
}

impl std::fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PythonVersion::Python2 => "python2",
            PythonVersion::Python3 => "python3",
        };
        write!(f, "{}", s)
    }
}

/// Check if running in a CI environment.
///
/// Used to auto-select the non-interactive UI in `main()` and to suppress
/// spinners in log-based environments. Checks common CI environment
/// variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`,
/// `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if running as root/admin.
///
/// Package installs on an elevated CI runner don't need a `sudo` prefix.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
